mod auth;
mod cart;
mod order;
mod product;
mod query;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::cart::AddToCartRequest;
pub use self::order::CheckoutRequest;
pub use self::product::{CreateProductRequest, LookupProductQuery, UpdateProductRequest};
pub use self::query::{FindAllQuery, UserOrdersQuery};
