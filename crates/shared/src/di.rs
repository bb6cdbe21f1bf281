use crate::{
    abstract_trait::{
        DynAdminService, DynAuthService, DynCartService, DynHashing, DynJwtService,
        DynOrderCommandService, DynOrderQueryService, DynProductCommandService,
        DynProductQueryService,
    },
    config::ConnectionPool,
    repository::{
        CartCommandRepository, CartQueryRepository, OrderCommandRepository, OrderQueryRepository,
        ProductCommandRepository, ProductQueryRepository, UserCommandRepository,
        UserQueryRepository,
    },
    service::{
        AdminService, AuthService, CartService, OrderCommandService, OrderQueryService,
        ProductCommandService, ProductQueryService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub cart_service: DynCartService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub admin_service: DynAdminService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("cart_service", &"DynCartService")
            .field("order_query", &"DynOrderQueryService")
            .field("order_command", &"DynOrderCommandService")
            .field("admin_service", &"DynAdminService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let user_query_repo = Arc::new(UserQueryRepository::new(pool.clone()));
        let user_command_repo = Arc::new(UserCommandRepository::new(pool.clone()));
        let product_query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(pool.clone()));
        let cart_query_repo = Arc::new(CartQueryRepository::new(pool.clone()));
        let cart_command_repo = Arc::new(CartCommandRepository::new(pool.clone()));
        let order_query_repo = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repo = Arc::new(OrderCommandRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(
            user_query_repo.clone(),
            user_command_repo,
            hashing,
            jwt,
        )) as DynAuthService;

        let product_query =
            Arc::new(ProductQueryService::new(product_query_repo.clone())) as DynProductQueryService;
        let product_command = Arc::new(ProductCommandService::new(
            product_command_repo,
            user_query_repo.clone(),
        )) as DynProductCommandService;

        let cart_service = Arc::new(CartService::new(
            cart_query_repo.clone(),
            cart_command_repo,
            product_query_repo.clone(),
        )) as DynCartService;

        let order_query =
            Arc::new(OrderQueryService::new(order_query_repo.clone())) as DynOrderQueryService;
        let order_command = Arc::new(OrderCommandService::new(cart_query_repo, order_command_repo))
            as DynOrderCommandService;

        let admin_service = Arc::new(AdminService::new(
            user_query_repo,
            product_query_repo,
            order_query_repo,
        )) as DynAdminService;

        Self {
            auth_service,
            product_query,
            product_command,
            cart_service,
            order_query,
            order_command,
            admin_service,
        }
    }
}
