use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub total_price: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One materialized order line. `total_price` is the price x quantity
/// snapshot taken at checkout time and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductOrder {
    pub product_order_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: i64,
}

/// Order line joined with the product name, for response shaping.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLineProduct {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: i64,
}

/// Order joined with the buyer's email, for the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderWithUser {
    pub order_id: i32,
    pub user_id: i32,
    pub user_email: String,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub total_price: i64,
}
