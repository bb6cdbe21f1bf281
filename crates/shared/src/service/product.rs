use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, DynUserQueryRepository,
        ProductCommandServiceTrait, ProductQueryServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, FindAllQuery, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        let data = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Products fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))?;

        Ok(ApiResponse::success(
            "Product fetched successfully",
            ProductResponse::from(product),
        ))
    }

    async fn lookup(&self, name: &str) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.query.find_by_name(name).await?.ok_or_else(|| {
            error!("❌ No product named '{}'", name);
            ServiceError::Repo(RepositoryError::NotFound)
        })?;

        Ok(ApiResponse::success(
            "Product fetched successfully",
            ProductResponse::from(product),
        ))
    }
}

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub user_query: DynUserQueryRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, user_query: DynUserQueryRepository) -> Self {
        Self {
            command,
            user_query,
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
                "❌ User {} attempted a catalog mutation without the admin role",
                acting_user_id
            );
            return Err(ServiceError::Forbidden("admin role required".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        acting_user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let product = self.command.create_product(req).await?;

        info!("✅ Product {} created", product.product_id);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        acting_user_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        let product = self.command.update_product(req).await?;

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(
        &self,
        acting_user_id: i32,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        self.ensure_admin(acting_user_id).await?;

        self.command.delete_product(id).await?;

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::ProductQueryRepositoryTrait, errors::HttpError, model::Product,
    };
    use axum::http::StatusCode;
    use std::sync::Arc;

    struct FakeCatalog {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for FakeCatalog {
        async fn find_all(
            &self,
            _req: &FindAllQuery,
        ) -> Result<(Vec<Product>, i64), crate::errors::RepositoryError> {
            Ok((self.products.clone(), self.products.len() as i64))
        }

        async fn find_by_id(
            &self,
            id: i32,
        ) -> Result<Option<Product>, crate::errors::RepositoryError> {
            Ok(self.products.iter().find(|p| p.product_id == id).cloned())
        }

        async fn find_by_name(
            &self,
            name: &str,
        ) -> Result<Option<Product>, crate::errors::RepositoryError> {
            Ok(self.products.iter().find(|p| p.name == name).cloned())
        }

        async fn count_all(&self) -> Result<i64, crate::errors::RepositoryError> {
            Ok(self.products.len() as i64)
        }
    }

    fn service_with(products: Vec<Product>) -> ProductQueryService {
        ProductQueryService::new(Arc::new(FakeCatalog { products }))
    }

    fn soap() -> Product {
        Product {
            product_id: 1,
            name: "Soap".to_string(),
            description: String::new(),
            price: 300,
            stock: 10,
            category: "misc".to_string(),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn lookup_finds_product_by_exact_name() {
        let service = service_with(vec![soap()]);

        let resp = service.lookup("Soap").await.expect("lookup");

        assert_eq!(resp.data.id, 1);
        assert_eq!(resp.data.name, "Soap");
    }

    #[tokio::test]
    async fn lookup_miss_is_not_found_not_internal() {
        let service = service_with(vec![soap()]);

        let err = service.lookup("no-such-product").await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));

        let http = HttpError::from(err);
        assert_eq!(http.status, StatusCode::NOT_FOUND);
        assert_eq!(http.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn find_by_id_miss_maps_to_product_not_found() {
        let service = service_with(vec![]);

        let err = service.find_by_id(9).await.unwrap_err();

        assert!(matches!(err, ServiceError::ProductNotFound(9)));
    }
}
