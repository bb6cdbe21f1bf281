use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllQuery,
        responses::{
            ApiResponse, ApiResponsePagination, OrderAdminResponse, OrderResponse, Pagination,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    pub query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn confirmation(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔍 Fetching confirmation for order {order_id}");

        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;
        let lines = self.query.find_lines(order_id).await?;

        Ok(ApiResponse::success(
            "Order fetched successfully",
            OrderResponse::from_parts(order, lines),
        ))
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;

        let mut data = Vec::with_capacity(orders.len());
        for order in orders {
            let lines = self.query.find_lines(order.order_id).await?;
            data.push(OrderResponse::from_parts(order, lines));
        }

        Ok(ApiResponse::success("Orders fetched successfully", data))
    }

    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<OrderAdminResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        let data = orders.into_iter().map(OrderAdminResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Orders fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }
}
