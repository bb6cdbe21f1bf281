use crate::{
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{CartItem as CartItemModel, CartItemProduct},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;
pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItemProduct>, RepositoryError>;
    async fn find_by_id(&self, cart_item_id: i32)
    -> Result<Option<CartItemModel>, RepositoryError>;
}

#[async_trait]
pub trait CartCommandRepositoryTrait {
    /// Upserts on the (user, product) pair: an existing row gets its
    /// quantity incremented, never duplicated.
    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError>;
    async fn delete_item(&self, cart_item_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<CartItemResponse>>, ServiceError>;
    async fn add_to_cart(
        &self,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
    async fn remove_item(&self, user_id: i32, item_id: i32)
    -> Result<ApiResponse<()>, ServiceError>;
}
