//! # Product Service
//!
//! Application-facing entry points for product operations.
//!
//! ## Contract
//! - `add` validates first; a rejected product never reaches the store.
//! - Every other method is pure delegation to the repository. Errors are
//!   passed through unchanged.

use productapp_core::validation::validate_product_create;
use productapp_core::{Product, ProductCreate};
use productapp_db::{DbResult, ProductRepository};
use tracing::{debug, warn};

use crate::error::ServiceResult;

/// Use-case service wrapper for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let service = ProductService::new(db.products());
/// let created = service.add(&ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Stored product with its assigned id
    /// * `Err(ServiceError::Validation)` - Input rejected, store untouched
    /// * `Err(ServiceError::Db)` - Persistence failure
    pub async fn add(&self, input: &ProductCreate) -> ServiceResult<Product> {
        if let Err(err) = validate_product_create(input) {
            warn!(field = err.field(), reason = %err, "Rejected product");
            return Err(err.into());
        }

        debug!(name = %input.name, store = %input.store, "Adding product");
        Ok(self.repo.add_product(input).await?)
    }

    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        self.repo.delete_by_id(id).await
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        self.repo.get_by_id(id).await
    }

    pub async fn update_price(&self, id: i64, price: f64) -> DbResult<()> {
        self.repo.update_price(id, price).await
    }

    /// Every product. Backend failures yield a partial or empty list;
    /// see [`try_get_all_products`](Self::try_get_all_products).
    pub async fn get_all_products(&self) -> Vec<Product> {
        self.repo.get_all_products().await
    }

    pub async fn get_all_products_by_store(&self, store: &str) -> Vec<Product> {
        self.repo.get_all_products_by_store(store).await
    }

    pub async fn try_get_all_products(&self) -> DbResult<Vec<Product>> {
        self.repo.try_get_all_products().await
    }

    pub async fn try_get_all_products_by_store(&self, store: &str) -> DbResult<Vec<Product>> {
        self.repo.try_get_all_products_by_store(store).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
