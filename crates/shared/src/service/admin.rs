use crate::{
    abstract_trait::{
        AdminServiceTrait, DynOrderQueryRepository, DynProductQueryRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::FindAllQuery,
        responses::{
            ApiResponse, ApiResponsePagination, DashboardStatsResponse, OrderAdminResponse,
            Pagination, ProductResponse, UserResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AdminService {
    pub user_query: DynUserQueryRepository,
    pub product_query: DynProductQueryRepository,
    pub order_query: DynOrderQueryRepository,
}

impl AdminService {
    pub fn new(
        user_query: DynUserQueryRepository,
        product_query: DynProductQueryRepository,
        order_query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            user_query,
            product_query,
            order_query,
        }
    }

    async fn ensure_admin(&self, acting_user_id: i32) -> Result<(), ServiceError> {
        let user = self
            .user_query
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| ServiceError::Forbidden("unknown user".to_string()))?;

        if !user.is_admin() {
            error!(
                "❌ User {} attempted to access the admin dashboard",
                acting_user_id
            );
            return Err(ServiceError::Forbidden("admin role required".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl AdminServiceTrait for AdminService {
    async fn stats(
        &self,
        acting_user_id: i32,
    ) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let total_users = self.user_query.count_all().await?;
        let total_products = self.product_query.count_all().await?;
        let total_orders = self.order_query.count_all().await?;
        let total_revenue = self.order_query.total_revenue().await?;

        info!("✅ Dashboard stats computed for admin {}", acting_user_id);

        Ok(ApiResponse::success(
            "Stats fetched successfully",
            DashboardStatsResponse {
                total_users,
                total_products,
                total_orders,
                total_revenue,
            },
        ))
    }

    async fn list_products(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let (products, total) = self.product_query.find_all(req).await?;
        let data = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Products fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn list_orders(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<OrderAdminResponse>>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let (orders, total) = self.order_query.find_all(req).await?;
        let data = orders.into_iter().map(OrderAdminResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Orders fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn list_users(
        &self,
        acting_user_id: i32,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let (users, total) = self.user_query.find_all(req).await?;
        let data = users.into_iter().map(UserResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Users fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            OrderQueryRepositoryTrait, ProductQueryRepositoryTrait, UserQueryRepositoryTrait,
        },
        errors::RepositoryError,
        model::{Order, OrderLineProduct, OrderWithUser, Product, User},
    };
    use std::sync::Arc;

    struct FakeCounts {
        users: i64,
        products: i64,
        orders: i64,
        revenue: i64,
        admin_ids: Vec<i32>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for FakeCounts {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            let role = if self.admin_ids.contains(&id) {
                "admin"
            } else {
                "customer"
            };
            Ok(Some(User {
                user_id: id,
                fullname: "Test".to_string(),
                email: format!("user{id}@example.com"),
                password: String::new(),
                role: role.to_string(),
                address: None,
                phone: None,
                created_at: None,
                updated_at: None,
            }))
        }

        async fn find_all(
            &self,
            _req: &FindAllQuery,
        ) -> Result<(Vec<User>, i64), RepositoryError> {
            Ok((vec![], self.users))
        }

        async fn count_all(&self) -> Result<i64, RepositoryError> {
            Ok(self.users)
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for FakeCounts {
        async fn find_all(
            &self,
            _req: &FindAllQuery,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            Ok((vec![], self.products))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Product>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn count_all(&self) -> Result<i64, RepositoryError> {
            Ok(self.products)
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for FakeCounts {
        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn find_lines(
            &self,
            _order_id: i32,
        ) -> Result<Vec<OrderLineProduct>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn find_by_user(&self, _user_id: i32) -> Result<Vec<Order>, RepositoryError> {
            unimplemented!("not used by admin tests")
        }

        async fn find_all(
            &self,
            _req: &FindAllQuery,
        ) -> Result<(Vec<OrderWithUser>, i64), RepositoryError> {
            Ok((vec![], self.orders))
        }

        async fn count_all(&self) -> Result<i64, RepositoryError> {
            Ok(self.orders)
        }

        async fn total_revenue(&self) -> Result<i64, RepositoryError> {
            Ok(self.revenue)
        }
    }

    fn service(admin_ids: Vec<i32>) -> AdminService {
        let fake = Arc::new(FakeCounts {
            users: 4,
            products: 7,
            orders: 2,
            revenue: 12345,
            admin_ids,
        });
        AdminService::new(fake.clone(), fake.clone(), fake)
    }

    #[tokio::test]
    async fn stats_aggregate_all_four_counters() {
        let service = service(vec![1]);

        let resp = service.stats(1).await.expect("stats");

        assert_eq!(resp.data.total_users, 4);
        assert_eq!(resp.data.total_products, 7);
        assert_eq!(resp.data.total_orders, 2);
        assert_eq!(resp.data.total_revenue, 12345);
    }

    #[tokio::test]
    async fn non_admin_is_rejected() {
        let service = service(vec![1]);

        let err = service.stats(2).await.unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
