use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Recycled notebook")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Price in integer cents.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 1000)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[schema(example = 25)]
    pub stock: i32,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "stationery")]
    pub category: String,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    pub id: i32,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct LookupProductQuery {
    pub name: String,
}
