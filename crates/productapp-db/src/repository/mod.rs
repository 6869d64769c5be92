//! # Repository Module
//!
//! The product persistence contract and its implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ProductService<R: ProductRepository>                                  │
//! │       │                                                                 │
//! │       │  repo.get_by_id(1)                                             │
//! │       ▼                                                                 │
//! │  ProductRepository (trait, this module)                                │
//! │  ├── SqlProductRepository       ──► SQLite via sqlx                    │
//! │  └── InMemoryProductRepository  ──► Vec<Product> behind an RwLock      │
//! │                                                                         │
//! │  Both implementations honour the same observable contract, so the     │
//! │  service can be tested without a database.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SqlProductRepository`](product::SqlProductRepository) - SQL-backed
//! - [`InMemoryProductRepository`](memory::InMemoryProductRepository) - test double

use async_trait::async_trait;
use productapp_core::{Product, ProductCreate};

use crate::error::DbResult;

pub mod memory;
pub mod product;

/// Persistence contract for products.
///
/// ## Bulk Reads
/// `get_all_*` never fail: a backend failure is logged and whatever rows
/// were read before it are returned, so an empty result does not prove
/// the store is empty. Callers that need to tell the difference use the
/// `try_get_all_*` variants.
///
/// ## Writes To Missing Rows
/// `delete_by_id` and `update_price` check existence first and return
/// `DbError::NotFound` for an absent id instead of succeeding silently.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, ordered by id.
    async fn get_all_products(&self) -> Vec<Product>;

    /// Products whose `store` equals `store` exactly, ordered by id.
    async fn get_all_products_by_store(&self, store: &str) -> Vec<Product>;

    /// Like [`get_all_products`](Self::get_all_products) but reports failures.
    async fn try_get_all_products(&self) -> DbResult<Vec<Product>>;

    /// Like [`get_all_products_by_store`](Self::get_all_products_by_store)
    /// but reports failures.
    async fn try_get_all_products_by_store(&self, store: &str) -> DbResult<Vec<Product>>;

    /// Inserts a product and returns it with its store-assigned id.
    async fn add_product(&self, product: &ProductCreate) -> DbResult<Product>;

    /// Looks up one product. Absent ids yield `DbError::NotFound`.
    async fn get_by_id(&self, id: i64) -> DbResult<Product>;

    /// Deletes one product. Absent ids yield `DbError::NotFound`.
    async fn delete_by_id(&self, id: i64) -> DbResult<()>;

    /// Replaces the price of one product; no other field changes.
    async fn update_price(&self, id: i64, price: f64) -> DbResult<()>;
}
