use serde::Serialize;
use utoipa::ToSchema;

/// Wire shape of every error. `code` is the machine-readable kind the
/// frontend switches on; `message` is for humans.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}
