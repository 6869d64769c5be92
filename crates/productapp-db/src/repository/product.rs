//! # Product Repository
//!
//! SQL implementation of [`ProductRepository`].
//!
//! ## Statements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                  SQL                                         │
//! │  ─────────────────────────  ──────────────────────────────────────────  │
//! │  get_all_products           SELECT … FROM products ORDER BY id          │
//! │  get_all_products_by_store  SELECT … WHERE store = ?1 ORDER BY id       │
//! │  add_product                INSERT … RETURNING …                        │
//! │  get_by_id                  SELECT … WHERE id = ?1                      │
//! │  delete_by_id               get_by_id, then DELETE … WHERE id = ?1      │
//! │  update_price               get_by_id, then UPDATE … SET price = ?1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read-Before-Write
//! Delete and update look the row up first so a missing id comes back as
//! `DbError::NotFound`. The lookup and the write are not one transaction;
//! if the row vanishes in between, the write affects zero rows and that
//! is reported as `NotFound` as well.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};
use crate::repository::ProductRepository;
use productapp_core::{Product, ProductCreate};

const SELECT_ALL_SQL: &str = r#"
    SELECT id, name, price, discount, store
    FROM products
    ORDER BY id
"#;

const SELECT_BY_STORE_SQL: &str = r#"
    SELECT id, name, price, discount, store
    FROM products
    WHERE store = ?1
    ORDER BY id
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let created = repo.add_product(&ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH")).await?;
/// let fetched = repo.get_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqlProductRepository {
    pool: SqlitePool,
}

impl SqlProductRepository {
    /// Creates a new SqlProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqlProductRepository { pool }
    }

    /// Looks up a product, returning `None` when the id is absent.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, discount, store
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Drains a row stream, stopping at the first error.
///
/// The error is logged and the rows read so far are returned.
async fn collect_until_error<S>(mut rows: S, operation: &'static str) -> Vec<Product>
where
    S: Stream<Item = Result<Product, sqlx::Error>> + Unpin,
{
    let mut products = Vec::new();

    while let Some(row) = rows.next().await {
        match row {
            Ok(product) => products.push(product),
            Err(err) => {
                error!(
                    operation,
                    error = %err,
                    collected = products.len(),
                    "Error while getting products from database"
                );
                break;
            }
        }
    }

    products
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn get_all_products(&self) -> Vec<Product> {
        let rows = sqlx::query_as::<_, Product>(SELECT_ALL_SQL).fetch(&self.pool);
        collect_until_error(rows, "get_all_products").await
    }

    async fn get_all_products_by_store(&self, store: &str) -> Vec<Product> {
        let rows = sqlx::query_as::<_, Product>(SELECT_BY_STORE_SQL)
            .bind(store)
            .fetch(&self.pool);
        collect_until_error(rows, "get_all_products_by_store").await
    }

    async fn try_get_all_products(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn try_get_all_products_by_store(&self, store: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_BY_STORE_SQL)
            .bind(store)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn add_product(&self, product: &ProductCreate) -> DbResult<Product> {
        debug!(name = %product.name, store = %product.store, "Inserting product");

        let inserted = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, discount, store)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, price, discount, store
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.price)
        .bind(product.discount)
        .bind(product.store.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            error!(error = %err, "Error while adding product to database");
            DbError::from(err)
        })?;

        info!(id = inserted.id, "Product added successfully");
        Ok(inserted)
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        self.get_by_id(id).await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!(id, error = %err, "Error while deleting product from database");
                DbError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id, "Product deleted successfully");
        Ok(())
    }

    async fn update_price(&self, id: i64, price: f64) -> DbResult<()> {
        self.get_by_id(id).await?;

        let result = sqlx::query("UPDATE products SET price = ?1 WHERE id = ?2")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!(id, error = %err, "Error while updating price of product");
                DbError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id, price, "Price updated successfully");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn empty_repo() -> (Database, SqlProductRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        (db, repo)
    }

    fn fixtures() -> Vec<ProductCreate> {
        vec![
            ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH"),
            ProductCreate::new("Ütü", 1500.0, 10.0, "ABC TECH"),
            ProductCreate::new("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"),
            ProductCreate::new("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"),
        ]
    }

    async fn seeded_repo() -> (Database, SqlProductRepository) {
        let (db, repo) = empty_repo().await;
        for product in fixtures() {
            repo.add_product(&product).await.unwrap();
        }
        (db, repo)
    }

    fn expected_fixtures() -> Vec<Product> {
        fixtures()
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.into_product(i as i64 + 1))
            .collect()
    }

    #[tokio::test]
    async fn test_get_all_products() {
        let (_db, repo) = seeded_repo().await;

        let actual = repo.get_all_products().await;
        assert_eq!(actual.len(), 4);
        assert_eq!(actual, expected_fixtures());
    }

    #[tokio::test]
    async fn test_get_all_products_empty_store() {
        let (_db, repo) = empty_repo().await;

        assert!(repo.get_all_products().await.is_empty());
        assert!(repo.try_get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_products_is_repeatable() {
        let (_db, repo) = seeded_repo().await;

        let first = repo.get_all_products().await;
        let second = repo.get_all_products().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_all_products_by_store() {
        let (_db, repo) = seeded_repo().await;

        let actual = repo.get_all_products_by_store("ABC TECH").await;
        let expected: Vec<Product> = expected_fixtures().into_iter().take(3).collect();
        assert_eq!(actual, expected);

        assert!(repo.get_all_products_by_store("abc tech").await.is_empty());
    }

    #[tokio::test]
    async fn test_add_product_assigns_first_id() {
        let (_db, repo) = empty_repo().await;

        let created = repo
            .add_product(&ProductCreate::new("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let actual = repo.get_all_products().await;
        assert_eq!(actual, vec![created]);
    }

    #[tokio::test]
    async fn test_added_product_is_last() {
        let (_db, repo) = seeded_repo().await;

        let input = ProductCreate::new("Blender", 750.0, 5.0, "ABC TECH");
        repo.add_product(&input).await.unwrap();

        let all = repo.get_all_products().await;
        assert_eq!(all.last(), Some(&input.into_product(5)));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (_db, repo) = seeded_repo().await;

        let actual = repo.get_by_id(1).await.unwrap();
        assert_eq!(actual, expected_fixtures()[0]);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let (_db, repo) = seeded_repo().await;

        let err = repo.get_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let (_db, repo) = seeded_repo().await;

        repo.delete_by_id(1).await.unwrap();

        let remaining = repo.get_all_products().await;
        assert_eq!(remaining.len(), 3);
        assert!(repo.get_by_id(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_absent_id_leaves_store_unchanged() {
        let (_db, repo) = seeded_repo().await;
        let before = repo.get_all_products().await;

        let err = repo.delete_by_id(42).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.get_all_products().await, before);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let (_db, repo) = seeded_repo().await;

        repo.delete_by_id(4).await.unwrap();
        let created = repo
            .add_product(&ProductCreate::new("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();
        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_update_price() {
        let (_db, repo) = seeded_repo().await;

        let before = repo.get_by_id(1).await.unwrap();
        assert_eq!(before.price, 3000.0);

        repo.update_price(1, 4000.0).await.unwrap();

        let after = repo.get_by_id(1).await.unwrap();
        assert_eq!(
            after,
            Product {
                price: 4000.0,
                ..before
            }
        );
    }

    #[tokio::test]
    async fn test_update_price_absent_id() {
        let (_db, repo) = seeded_repo().await;
        let before = repo.get_all_products().await;

        let err = repo.update_price(42, 10.0).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.get_all_products().await, before);
    }

    #[tokio::test]
    async fn test_count() {
        let (_db, repo) = seeded_repo().await;
        assert_eq!(repo.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_bulk_reads_after_close() {
        let (db, repo) = seeded_repo().await;
        db.close().await;

        // Lenient reads degrade to an empty result
        assert!(repo.get_all_products().await.is_empty());
        assert!(repo.get_all_products_by_store("ABC TECH").await.is_empty());

        // Strict reads report the failure
        let err = repo.try_get_all_products().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));

        // Lookups report a persistence failure, not NotFound
        let err = repo.get_by_id(1).await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_bulk_reads_stop_at_undecodable_row() {
        let (db, repo) = empty_repo().await;
        repo.add_product(&ProductCreate::new("A", 10.0, 0.0, "S")).await.unwrap();
        repo.add_product(&ProductCreate::new("B", 20.0, 0.0, "S")).await.unwrap();

        // Column affinity keeps 'abc' as TEXT, which does not decode as f64
        sqlx::query("INSERT INTO products (name, price, discount, store) VALUES ('C', 'abc', 0, 'S')")
            .execute(db.pool())
            .await
            .unwrap();
        repo.add_product(&ProductCreate::new("D", 40.0, 0.0, "S")).await.unwrap();

        let names = |products: Vec<Product>| -> Vec<String> {
            products.into_iter().map(|p| p.name).collect()
        };

        // Rows before the bad one come back; nothing after it does
        assert_eq!(names(repo.get_all_products().await), vec!["A", "B"]);
        assert_eq!(names(repo.get_all_products_by_store("S").await), vec!["A", "B"]);

        let err = repo.try_get_all_products().await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
        let err = repo.try_get_all_products_by_store("S").await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));

        // The pool is still usable afterwards
        assert_eq!(repo.get_by_id(4).await.unwrap().name, "D");
    }
}
