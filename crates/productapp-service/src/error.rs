//! # Service Error Type
//!
//! Unified error type returned by [`ProductService::add`](crate::ProductService::add).
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  ProductService::add(input)                                            │
//! │       │                                                                 │
//! │       ├── validation fails ──► ServiceError::Validation  (no DB call)  │
//! │       │                                                                 │
//! │       └── repository fails ──► ServiceError::Db                        │
//! │                                                                         │
//! │  Other service methods pass DbError through unchanged.                 │
//! │                                                                         │
//! │  Front-ends map ServiceError::code() to their own status codes:        │
//! │    NOT_FOUND → 404   VALIDATION_ERROR → 400   DATABASE_ERROR → 500     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use productapp_core::ValidationError;
use productapp_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before any store access.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Failure reported by the repository.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl ServiceError {
    /// Machine-readable category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(_) => ErrorCode::ValidationError,
            ServiceError::Db(err) => ErrorCode::from(err),
        }
    }
}

/// Error codes for callers that need to branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,
}

impl From<&DbError> for ErrorCode {
    fn from(err: &DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ErrorCode::NotFound,
            _ => ErrorCode::DatabaseError,
        }
    }
}

/// Result type for service operations that validate input.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = ServiceError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Validation error: name is required");

        let err = ServiceError::from(DbError::not_found("Product", 7));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Product not found: 7");

        let err = ServiceError::from(DbError::PoolExhausted);
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }
}
