//! # Validation Module
//!
//! Field rules applied to a [`ProductCreate`] before it reaches the
//! database.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_product_create                            │
//! │                                                                         │
//! │  1. name empty?             ──► Required { field: "name" }             │
//! │  2. price <= 0?             ──► MustBePositive { field: "price" }      │
//! │  3. store empty?            ──► Required { field: "store" }            │
//! │  4. discount not in [0,70)? ──► OutOfRange { field: "discount" }       │
//! │                                                                         │
//! │  First failure wins. Errors are not aggregated.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules run at creation time only. Reads never re-validate stored rows.

use crate::error::ValidationError;
use crate::types::ProductCreate;
use crate::MAX_DISCOUNT_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Aggregate Validator
// =============================================================================

/// Validates a product before it is created.
///
/// ## Example
/// ```rust
/// use productapp_core::validation::validate_product_create;
/// use productapp_core::{ProductCreate, ValidationError};
///
/// let input = ProductCreate::new("", 0.0, 90.0, "");
/// // Only the first failing rule is reported
/// assert_eq!(
///     validate_product_create(&input),
///     Err(ValidationError::Required { field: "name".to_string() })
/// );
/// ```
pub fn validate_product_create(input: &ProductCreate) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_price(input.price)?;
    validate_store(&input.store)?;
    validate_discount(input.discount)?;
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name. Only the empty string is rejected.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_text("name", name)
}

/// Validates the owning store name. Only the empty string is rejected.
pub fn validate_store(store: &str) -> ValidationResult<()> {
    require_text("store", store)
}

fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive
/// - NaN is rejected along with zero and negatives
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be in `[0, MAX_DISCOUNT_PERCENT)`
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !(0.0..MAX_DISCOUNT_PERCENT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
