use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Checkout takes only the buyer; the cart lines are read server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckoutRequest {
    #[validate(range(min = 1, message = "User ID is required"))]
    #[schema(example = 1)]
    pub user_id: i32,
}
