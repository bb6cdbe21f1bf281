use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DashboardStatsResponse {
    pub total_users: i64,
    pub total_products: i64,
    pub total_orders: i64,
    /// Sum of all order totals, in integer cents.
    pub total_revenue: i64,
}
