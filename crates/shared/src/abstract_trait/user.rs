use crate::{
    domain::{
        requests::{FindAllQuery, LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

/// Row values for a new user, post-validation and with the password already
/// hashed.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_all(&self, req: &FindAllQuery)
    -> Result<(Vec<UserModel>, i64), RepositoryError>;
    async fn count_all(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, user: &CreateUserData) -> Result<UserModel, RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
