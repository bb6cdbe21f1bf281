use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub role: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response; the password hash never leaves the repository layer
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            fullname: value.fullname,
            email: value.email,
            role: value.role,
            address: value.address,
            phone: value.phone,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
