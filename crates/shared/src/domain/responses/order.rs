use crate::model::{Order, OrderLineProduct, OrderWithUser};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: i64,
}

// join row to response
impl From<OrderLineProduct> for OrderItemResponse {
    fn from(value: OrderLineProduct) -> Self {
        OrderItemResponse {
            product_name: value.product_name,
            quantity: value.quantity,
            total_price: value.total_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub order_date: String,
    pub status: String,
    pub total_price: i64,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, lines: Vec<OrderLineProduct>) -> Self {
        OrderResponse {
            id: order.order_id,
            order_date: order.order_date.to_string(),
            status: order.status,
            total_price: order.total_price,
            items: lines.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

/// Admin listing row; includes the buyer's email instead of the line items.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderAdminResponse {
    pub id: i32,
    pub user_id: i32,
    pub user_email: String,
    pub order_date: String,
    pub status: String,
    pub total_price: i64,
}

// join row to response
impl From<OrderWithUser> for OrderAdminResponse {
    fn from(value: OrderWithUser) -> Self {
        OrderAdminResponse {
            id: value.order_id,
            user_id: value.user_id,
            user_email: value.user_email,
            order_date: value.order_date.to_string(),
            status: value.status,
            total_price: value.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn order_response_carries_line_snapshots() {
        let order = Order {
            order_id: 3,
            user_id: 1,
            order_date: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            status: "pending".to_string(),
            total_price: 2500,
            created_at: None,
            updated_at: None,
        };
        let lines = vec![
            OrderLineProduct {
                product_name: "A".to_string(),
                quantity: 2,
                total_price: 2000,
            },
            OrderLineProduct {
                product_name: "B".to_string(),
                quantity: 1,
                total_price: 500,
            },
        ];

        let resp = OrderResponse::from_parts(order, lines);

        assert_eq!(resp.id, 3);
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].product_name, "A");
        assert_eq!(
            resp.total_price,
            resp.items.iter().map(|i| i.total_price).sum::<i64>()
        );
    }
}
