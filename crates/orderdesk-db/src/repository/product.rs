//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD via the generic mapper
//! - The dedicated stock update used by order fulfillment
//!
//! ## Stock Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  update() rewrites the whole record:                                   │
//! │     UPDATE product SET name = ?, ..., stock_quantity = ? WHERE ...     │
//! │                                                                         │
//! │  update_stock() touches ONLY the stock column:                         │
//! │     UPDATE product SET stock_quantity = ? WHERE product_id = ?         │
//! │                                                                         │
//! │  The fulfillment flow always uses update_stock so a reservation can    │
//! │  never clobber concurrent edits to the other product fields.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::mapper::{Mapper, Record, SqlValue};
use orderdesk_core::Product;

impl Record for Product {
    const TABLE: &'static str = "product";
    const ID_COLUMN: &'static str = "product_id";

    fn id(&self) -> i64 {
        self.product_id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.description.as_str().into(),
            self.price_cents.into(),
            self.stock_quantity.into(),
        ]
    }
}

const INSERT: &str =
    "INSERT INTO product (name, description, price_cents, stock_quantity) \
     VALUES (?1, ?2, ?3, ?4)";

const UPDATE: &str =
    "UPDATE product SET name = ?1, description = ?2, price_cents = ?3, stock_quantity = ?4 \
     WHERE product_id = ?5";

const UPDATE_STOCK: &str = "UPDATE product SET stock_quantity = ?1 WHERE product_id = ?2";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    mapper: Mapper<Product>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository {
            mapper: Mapper::new(pool),
        }
    }

    /// Fetches all products.
    pub async fn find_all(&self) -> DbResult<Vec<Product>> {
        self.mapper.find_all().await
    }

    /// Fetches a product by id; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        self.mapper.find_by_id(id).await
    }

    /// Inserts a new product. The store assigns the identifier.
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(name = %product.name, "Inserting product");

        self.mapper
            .execute("insert", INSERT, &product.values())
            .await?;
        Ok(())
    }

    /// Updates an existing product (full-record replacement).
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id(), "Updating product");

        let mut params = product.values();
        params.push(product.id().into());

        let affected = self.mapper.execute("update", UPDATE, &params).await?;
        if affected == 0 {
            return Err(DbError::not_found("Product", product.id()));
        }

        Ok(())
    }

    /// Sets the stock level of a product, touching no other column.
    ///
    /// This is the statement the order fulfillment operation issues when it
    /// reserves stock. It sets the absolute quantity; the caller computes
    /// `current - desired`.
    pub async fn update_stock(&self, product_id: i64, new_quantity: i64) -> DbResult<()> {
        debug!(id = product_id, new_quantity, "Updating stock");

        let affected = self
            .mapper
            .execute(
                "update_stock",
                UPDATE_STOCK,
                &[new_quantity.into(), product_id.into()],
            )
            .await?;

        if affected == 0 {
            return Err(DbError::not_found("Product", product_id));
        }

        Ok(())
    }

    /// Deletes a product by id.
    ///
    /// Returns the number of rows affected; deleting a missing id is `Ok(0)`.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting product");

        self.mapper.delete(id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_product() -> Product {
        Product {
            product_id: 0,
            name: "Widget".to_string(),
            description: "A very round widget".to_string(),
            price_cents: 499,
            stock_quantity: 10,
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back_round_trip() {
        let db = db().await;
        let repo = db.products();

        repo.insert(&sample_product()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);

        let expected = sample_product();
        let got = repo.find_by_id(all[0].product_id).await.unwrap().unwrap();
        assert!(got.product_id > 0);
        assert_eq!(got.name, expected.name);
        assert_eq!(got.description, expected.description);
        assert_eq!(got.price_cents, expected.price_cents);
        assert_eq!(got.stock_quantity, expected.stock_quantity);
    }

    #[tokio::test]
    async fn test_update_stock_touches_only_stock() {
        let db = db().await;
        let repo = db.products();

        repo.insert(&sample_product()).await.unwrap();
        let stored = repo.find_all().await.unwrap().remove(0);

        repo.update_stock(stored.product_id, 3).await.unwrap();

        let fetched = repo.find_by_id(stored.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.stock_quantity, 3);
        assert_eq!(fetched.name, stored.name);
        assert_eq!(fetched.price_cents, stored.price_cents);
    }

    #[tokio::test]
    async fn test_update_stock_missing_product_is_not_found() {
        let db = db().await;

        let err = db.products().update_stock(404, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_null_description_reads_as_default() {
        let db = db().await;

        // Bypass the repository to store a NULL description.
        sqlx::query(
            "INSERT INTO product (name, description, price_cents, stock_quantity) \
             VALUES ('Mystery', NULL, 100, 1)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let product = db.products().find_all().await.unwrap().remove(0);
        assert_eq!(product.description, "");
        assert_eq!(product.name, "Mystery");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = db().await;
        let repo = db.products();

        repo.insert(&sample_product()).await.unwrap();
        let id = repo.find_all().await.unwrap()[0].product_id;

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }
}
