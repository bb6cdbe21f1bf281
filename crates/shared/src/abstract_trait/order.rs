use crate::{
    domain::{
        requests::{CheckoutRequest, FindAllQuery},
        responses::{ApiResponse, ApiResponsePagination, OrderAdminResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderLineProduct, OrderWithUser},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

/// One validated order line headed into materialization. `line_total` is the
/// price x quantity snapshot computed by the checkout service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub product_id: i32,
    pub quantity: i32,
    pub line_total: i64,
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLineProduct>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<(Vec<OrderWithUser>, i64), RepositoryError>;
    async fn count_all(&self) -> Result<i64, RepositoryError>;
    async fn total_revenue(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Materializes a cart into an order in one transaction: order row,
    /// one line per cart line, guarded stock decrement, cart cleared.
    /// Either everything commits or nothing does.
    async fn create_with_lines(
        &self,
        user_id: i32,
        total_price: i64,
        lines: &[NewOrderLine],
    ) -> Result<OrderModel, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn confirmation(&self, order_id: i32)
    -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<OrderAdminResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn checkout(
        &self,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
