use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// HTTP-facing error. Every instance carries the machine-readable `code`
/// that ends up in the `ErrorResponse` body alongside the status.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", message)
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
            }

            ServiceError::Validation(errors) => {
                HttpError::bad_request("VALIDATION", format!("Validation failed: {errors:?}"))
            }

            ServiceError::EmptyCart => {
                HttpError::bad_request("EMPTY_CART", "Cart is empty, nothing to check out")
            }

            ServiceError::InsufficientStock {
                product_id,
                requested,
                available,
            } => HttpError::conflict(
                "INSUFFICIENT_STOCK",
                format!(
                    "Insufficient stock for product {product_id}: requested {requested}, available {available}"
                ),
            ),

            ServiceError::ProductNotFound(product_id) => HttpError::not_found(
                "PRODUCT_NOT_FOUND",
                format!("Product not found: {product_id}"),
            ),

            ServiceError::UnauthorizedCartAccess => HttpError::forbidden(
                "UNAUTHORIZED_CART_ACCESS",
                "Cart item does not belong to the requesting user",
            ),

            ServiceError::Forbidden(msg) => HttpError::forbidden("FORBIDDEN", msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::not_found("NOT_FOUND", "Not found"),
                RepositoryError::Conflict(msg) => HttpError::conflict("CONFLICT", msg),
                RepositoryError::AlreadyExists(msg) => HttpError::conflict("ALREADY_EXISTS", msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::bad_request("FOREIGN_KEY", format!("Foreign key violation: {msg}"))
                }
                RepositoryError::StockConflict { product_id } => HttpError::conflict(
                    "INSUFFICIENT_STOCK",
                    format!("Insufficient stock for product {product_id}"),
                ),
                _ => HttpError::internal("Repository error"),
            },

            ServiceError::Jwt(err) => {
                HttpError::unauthorized("INVALID_TOKEN", format!("JWT error: {err}"))
            }

            ServiceError::TokenExpired => {
                HttpError::unauthorized("TOKEN_EXPIRED", "Token expired")
            }

            ServiceError::InvalidTokenType => {
                HttpError::unauthorized("INVALID_TOKEN", "Invalid token type")
            }

            ServiceError::Bcrypt(_) => HttpError::internal("Internal authentication error"),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            status: "error".into(),
            code: self.code.into(),
            message: self.message,
        });

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_errors_carry_machine_readable_codes() {
        let err = HttpError::from(ServiceError::EmptyCart);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "EMPTY_CART");

        let err = HttpError::from(ServiceError::InsufficientStock {
            product_id: 3,
            requested: 5,
            available: 1,
        });
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "INSUFFICIENT_STOCK");

        let err = HttpError::from(ServiceError::ProductNotFound(9));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "PRODUCT_NOT_FOUND");

        let err = HttpError::from(ServiceError::UnauthorizedCartAccess);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.code, "UNAUTHORIZED_CART_ACCESS");
    }

    #[test]
    fn stock_conflict_from_repository_maps_like_insufficient_stock() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::StockConflict {
            product_id: 11,
        }));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "INSUFFICIENT_STOCK");
    }
}
