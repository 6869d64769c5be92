//! # In-Memory Product Repository
//!
//! A [`ProductRepository`] backed by a `Vec<Product>`, used to exercise the
//! service layer without a database.
//!
//! It follows the same observable contract as the SQL repository:
//! ids come from a counter that never goes backwards, absent ids yield
//! `DbError::NotFound`, and reads return products in id order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{DbError, DbResult};
use crate::repository::ProductRepository;
use productapp_core::{Product, ProductCreate};

#[derive(Debug)]
struct MemoryState {
    products: Vec<Product>,
    next_id: i64,
}

/// In-memory product store.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InMemoryProductRepository::with_products(vec![seed]);
/// let service = ProductService::new(repo);
/// ```
#[derive(Debug)]
pub struct InMemoryProductRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository; the first product gets id 1.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Creates a repository pre-loaded with `initial`.
    ///
    /// New ids continue after the largest id in `initial`.
    pub fn with_products(mut initial: Vec<Product>) -> Self {
        initial.sort_by_key(|p| p.id);
        let next_id = initial.last().map_or(1, |p| p.id + 1);

        InMemoryProductRepository {
            state: RwLock::new(MemoryState {
                products: initial,
                next_id,
            }),
        }
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.state.read().await.products.len()
    }

    /// Whether the repository holds no products.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all_products(&self) -> Vec<Product> {
        self.state.read().await.products.clone()
    }

    async fn get_all_products_by_store(&self, store: &str) -> Vec<Product> {
        self.state
            .read()
            .await
            .products
            .iter()
            .filter(|p| p.store == store)
            .cloned()
            .collect()
    }

    async fn try_get_all_products(&self) -> DbResult<Vec<Product>> {
        Ok(self.get_all_products().await)
    }

    async fn try_get_all_products_by_store(&self, store: &str) -> DbResult<Vec<Product>> {
        Ok(self.get_all_products_by_store(store).await)
    }

    async fn add_product(&self, product: &ProductCreate) -> DbResult<Product> {
        let mut state = self.state.write().await;

        let created = product.clone().into_product(state.next_id);
        state.next_id += 1;
        state.products.push(created.clone());

        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        let mut state = self.state.write().await;

        let index = state
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DbError::not_found("Product", id))?;
        state.products.remove(index);

        Ok(())
    }

    async fn update_price(&self, id: i64, price: f64) -> DbResult<()> {
        let mut state = self.state.write().await;

        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DbError::not_found("Product", id))?;
        product.price = price;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Product> {
        vec![
            ProductCreate::new("Product 2", 200.0, 20.0, "Store 2").into_product(2),
            ProductCreate::new("Product 1", 100.0, 10.0, "Store 1").into_product(1),
        ]
    }

    #[tokio::test]
    async fn test_seeded_products_are_ordered_by_id() {
        let repo = InMemoryProductRepository::with_products(seed());

        let ids: Vec<i64> = repo.get_all_products().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ids_continue_after_seed_and_survive_deletes() {
        let repo = InMemoryProductRepository::with_products(seed());

        repo.delete_by_id(2).await.unwrap();
        let created = repo
            .add_product(&ProductCreate::new("Product 3", 300.0, 0.0, "Store 1"))
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_empty_repository_starts_at_one() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.is_empty().await);

        let created = repo
            .add_product(&ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryProductRepository::with_products(seed());

        assert!(repo.get_by_id(9).await.unwrap_err().is_not_found());
        assert!(repo.delete_by_id(9).await.unwrap_err().is_not_found());
        assert!(repo.update_price(9, 1.0).await.unwrap_err().is_not_found());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_price_touches_only_price() {
        let repo = InMemoryProductRepository::with_products(seed());
        let before = repo.get_by_id(1).await.unwrap();

        repo.update_price(1, 150.0).await.unwrap();

        let after = repo.get_by_id(1).await.unwrap();
        assert_eq!(after, Product { price: 150.0, ..before });
    }

    #[tokio::test]
    async fn test_filter_by_store() {
        let repo = InMemoryProductRepository::with_products(seed());

        let products = repo.get_all_products_by_store("Store 2").await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Product 2");
        assert!(repo
            .try_get_all_products_by_store("Store 9")
            .await
            .unwrap()
            .is_empty());
    }
}
