//! # Domain Types
//!
//! The two shapes a product takes on its way through the system.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐    add_product    ┌─────────────────┐             │
//! │  │  ProductCreate  │ ────────────────► │     Product     │             │
//! │  │  ─────────────  │   (store assigns  │  ─────────────  │             │
//! │  │  name           │       the id)     │  id (i64)       │             │
//! │  │  price          │                   │  name           │             │
//! │  │  discount       │                   │  price          │             │
//! │  │  store          │                   │  discount       │             │
//! │  └─────────────────┘                   │  store          │             │
//! │                                        └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! After creation only `price` may change (via `update_price`); every other
//! field is fixed until the product is deleted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Identifier assigned by the store on insert.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price (currency amount).
    pub price: f64,

    /// Discount percentage, 0 to below 70.
    pub discount: f64,

    /// Store or branch that owns the product.
    pub store: String,
}

// =============================================================================
// Product Create
// =============================================================================

/// Input for creating a product. Carries no id; the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        discount: f64,
        store: impl Into<String>,
    ) -> Self {
        ProductCreate {
            name: name.into(),
            price,
            discount,
            store: store.into(),
        }
    }

    /// Builds the stored product once the store has assigned `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
