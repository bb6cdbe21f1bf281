mod cart;
mod hashing;
mod jwt;
mod order;
mod product;
mod stats;
mod user;

pub use self::cart::{
    CartCommandRepositoryTrait, CartQueryRepositoryTrait, CartServiceTrait,
    DynCartCommandRepository, DynCartQueryRepository, DynCartService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, NewOrderLine, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::stats::{AdminServiceTrait, DynAdminService};
pub use self::user::{
    AuthServiceTrait, CreateUserData, DynAuthService, DynUserCommandRepository,
    DynUserQueryRepository, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
};
