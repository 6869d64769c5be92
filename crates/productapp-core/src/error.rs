//! # Error Types
//!
//! Domain-specific error types for productapp-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  productapp-core (this file)                                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  productapp-db                                                         │
//! │  └── DbError          - NotFound and persistence failures              │
//! │                                                                         │
//! │  productapp-service                                                    │
//! │  └── ServiceError     - Validation | Db, with a machine-readable code  │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├──► ServiceError ──► caller                   │
//! │  DbError ───────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any persistence call is made, so a failed validation
/// never has side effects. Never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Numeric value falls outside the half-open range `[min, max)`.
    #[error("{field} must be at least {min} and less than {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than 0");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: 70.0,
        };
        assert_eq!(
            err.to_string(),
            "discount must be at least 0 and less than 70"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::Required {
            field: "store".to_string(),
        };
        assert_eq!(err.field(), "store");
    }
}
