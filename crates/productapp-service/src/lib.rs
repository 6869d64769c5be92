//! # productapp-service: Product Service
//!
//! The interface front-ends (HTTP handlers, CLIs, RPC layers) call.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  caller                                                                │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ProductService::<op>                                                  │
//! │    │   (add only: validate_product_create, first failure wins)         │
//! │    ▼                                                                    │
//! │  ProductRepository::<op>  ──►  SQLite  |  in-memory store              │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Product / DbError / ServiceError back up the chain                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use productapp_db::{Database, DbConfig};
//! use productapp_service::ProductService;
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let service = ProductService::new(db.products());
//!
//! let created = service.add(&ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH")).await?;
//! service.update_price(created.id, 2750.0).await?;
//!
//! db.close().await;
//! ```

pub mod error;
pub mod product;

pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use product::ProductService;
