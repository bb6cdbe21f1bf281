use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// The guarded stock decrement matched zero rows, meaning another
    /// checkout drained the stock first. The surrounding transaction must
    /// roll back.
    #[error("Insufficient stock for product {product_id}")]
    StockConflict { product_id: i32 },

    #[error("Custom: {0}")]
    Custom(String),
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl RepositoryError {
    /// Classifies constraint violations that the runtime-checked query API
    /// reports as plain database errors.
    pub fn from_sqlx(err: SqlxError, context: &str) -> Self {
        if let SqlxError::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return RepositoryError::AlreadyExists(context.to_string());
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return RepositoryError::ForeignKey(context.to_string());
                }
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
