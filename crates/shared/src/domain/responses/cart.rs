use crate::model::CartItemProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cart line as the frontend expects it: product fields flattened onto the
/// line, `available` being the product's current stock.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub quantity: i32,
    pub available: i32,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

// join row to response
impl From<CartItemProduct> for CartItemResponse {
    fn from(value: CartItemProduct) -> Self {
        CartItemResponse {
            id: value.cart_item_id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
            available: value.stock,
            image_url: value.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_product_fields_onto_the_line() {
        let row = CartItemProduct {
            cart_item_id: 5,
            user_id: 1,
            product_id: 9,
            quantity: 2,
            name: "Bamboo cup".to_string(),
            description: "Reusable".to_string(),
            price: 1250,
            stock: 7,
            image_url: Some("/media/products/cup.png".to_string()),
        };

        let resp = CartItemResponse::from(row);

        assert_eq!(resp.id, 5);
        assert_eq!(resp.name, "Bamboo cup");
        assert_eq!(resp.price, 1250);
        assert_eq!(resp.quantity, 2);
        assert_eq!(resp.available, 7);
        assert_eq!(resp.image_url.as_deref(), Some("/media/products/cup.png"));
    }

    #[test]
    fn image_url_serializes_camel_cased() {
        let resp = CartItemResponse {
            id: 1,
            name: "x".into(),
            description: String::new(),
            price: 100,
            quantity: 1,
            available: 1,
            image_url: None,
        };

        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }
}
