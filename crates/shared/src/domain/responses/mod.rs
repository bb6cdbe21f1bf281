mod api;
mod cart;
mod order;
mod pagination;
mod product;
mod stats;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::cart::CartItemResponse;
pub use self::order::{OrderAdminResponse, OrderItemResponse, OrderResponse};
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
pub use self::stats::DashboardStatsResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
