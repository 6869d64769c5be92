//! # productapp-db: Persistence Layer
//!
//! Database access for the products catalogue, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        productapp Data Flow                             │
//! │                                                                         │
//! │  ProductService::get_by_id(1)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  productapp-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │ (embedded) │  │   │
//! │  │   │               │    │ SqlProductRepo     │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ InMemoryProductRepo│  │ 001_create │  │   │
//! │  │   │ DbConfig      │    │                    │  │ _products  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and configuration error types
//! - [`repository`] - `ProductRepository` contract and implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use productapp_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let products = db.products().get_all_products_by_store("ABC TECH").await;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::memory::InMemoryProductRepository;
pub use repository::product::SqlProductRepository;
pub use repository::ProductRepository;
