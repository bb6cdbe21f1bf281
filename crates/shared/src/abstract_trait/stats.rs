use crate::{
    domain::{
        requests::FindAllQuery,
        responses::{
            ApiResponse, ApiResponsePagination, DashboardStatsResponse, OrderAdminResponse,
            ProductResponse, UserResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAdminService = Arc<dyn AdminServiceTrait + Send + Sync>;

/// Admin dashboard surface. Every method verifies the acting user's role
/// before touching anything else.
#[async_trait]
pub trait AdminServiceTrait {
    async fn stats(
        &self,
        acting_user_id: i32,
    ) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError>;
    async fn list_products(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn list_orders(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<OrderAdminResponse>>, ServiceError>;
    async fn list_users(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError>;
}
