//! Range set error types.

use thiserror::Error;

/// Range set errors
#[derive(Debug, Error)]
pub enum RangeError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed or incomplete input; recoverable by resubmitting
    #[error("Invalid range set: {0}")]
    Validation(String),

    /// Row absent, or owned by another user. The two cases are
    /// deliberately indistinguishable so callers cannot probe for the
    /// existence of other users' data.
    #[error("Range set not found")]
    NotFound,
}

impl RangeError {
    /// Get a client-safe error message that doesn't leak sensitive
    /// information.
    ///
    /// Database errors are sanitized to prevent information disclosure
    /// about the internal system structure.
    pub fn client_message(&self) -> String {
        match self {
            RangeError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for range set operations
pub type RangeResult<T> = Result<T, RangeError>;
