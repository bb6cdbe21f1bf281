use crate::{
    abstract_trait::{
        AuthServiceTrait, CreateUserData, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AuthService {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🏗️ Registering user {}", req.email);

        if self.query.find_by_email(&req.email).await?.is_some() {
            error!("❌ Email {} already registered", req.email);
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "email already registered".to_string(),
            )));
        }

        let hashed = self.hashing.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&CreateUserData {
                fullname: req.fullname.clone(),
                email: req.email.clone(),
                password: hashed,
                role: "customer".to_string(),
                address: req.address.clone(),
                phone: req.phone.clone(),
            })
            .await?;

        info!("✅ Registered user ID {}", user.user_id);

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .query
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user.user_id as i64, "refresh")?;

        info!("✅ User {} logged in", user.user_id);

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }

    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "User fetched successfully",
            UserResponse::from(user),
        ))
    }
}
