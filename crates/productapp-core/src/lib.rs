//! # productapp-core: Product Domain Types
//!
//! Pure types and validation rules shared by the database and service
//! layers. Nothing in this crate touches the network or the filesystem.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        productapp Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front-end (HTTP / CLI / RPC - external)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              productapp-service (ProductService)                │   │
//! │  │         validation on add, delegation everywhere else           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              productapp-db (ProductRepository)                  │   │
//! │  │           SQL text, row mapping, pool, migrations               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ★ productapp-core (THIS CRATE) ★ is used by both layers:              │
//! │     Product, ProductCreate, ValidationError, validation rules          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `ProductCreate`
//! - [`error`] - Validation error type
//! - [`validation`] - Field rules applied before a product is created
//!
//! ## Example Usage
//!
//! ```rust
//! use productapp_core::{validation::validate_product_create, ProductCreate};
//!
//! let input = ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH");
//! assert!(validate_product_create(&input).is_ok());
//!
//! let free = ProductCreate::new("AirFryer", 0.0, 22.0, "ABC TECH");
//! assert!(validate_product_create(&free).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount percentages must stay strictly below this value.
///
/// ## Business Reason
/// Anything at or above 70% is treated as a data-entry mistake rather
/// than a real promotion.
pub const MAX_DISCOUNT_PERCENT: f64 = 70.0;
