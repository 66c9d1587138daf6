//! # Order Repository
//!
//! Database operations for orders.
//!
//! Orders are normally created through the fulfillment operation, which pairs
//! the insert with a stock reservation. Deleting an order here does **not**
//! restore product stock; that asymmetry is the tool's documented behavior.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::mapper::{Mapper, Record, SqlValue};
use orderdesk_core::Order;

impl Record for Order {
    const TABLE: &'static str = "orders";
    const ID_COLUMN: &'static str = "order_id";

    fn id(&self) -> i64 {
        self.order_id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.client_id.into(),
            self.product_id.into(),
            self.quantity.into(),
            self.order_date.into(),
        ]
    }
}

// Shared with the atomic fulfillment path so both issue the exact same insert.
pub(crate) const INSERT: &str =
    "INSERT INTO orders (client_id, product_id, quantity, order_date) VALUES (?1, ?2, ?3, ?4)";

const UPDATE: &str =
    "UPDATE orders SET client_id = ?1, product_id = ?2, quantity = ?3, order_date = ?4 \
     WHERE order_id = ?5";

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    mapper: Mapper<Order>,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository {
            mapper: Mapper::new(pool),
        }
    }

    /// Fetches all orders.
    pub async fn find_all(&self) -> DbResult<Vec<Order>> {
        self.mapper.find_all().await
    }

    /// Fetches an order by id; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        self.mapper.find_by_id(id).await
    }

    /// Inserts a new order. The store assigns the identifier.
    ///
    /// The referenced client and product must exist; the store's foreign-key
    /// policy rejects dangling references.
    pub async fn insert(&self, order: &Order) -> DbResult<()> {
        debug!(
            client_id = order.client_id,
            product_id = order.product_id,
            quantity = order.quantity,
            "Inserting order"
        );

        self.mapper.execute("insert", INSERT, &order.values()).await?;
        Ok(())
    }

    /// Updates an existing order (full-record replacement).
    pub async fn update(&self, order: &Order) -> DbResult<()> {
        debug!(id = order.id(), "Updating order");

        let mut params = order.values();
        params.push(order.id().into());

        let affected = self.mapper.execute("update", UPDATE, &params).await?;
        if affected == 0 {
            return Err(DbError::not_found("Order", order.id()));
        }

        Ok(())
    }

    /// Deletes an order by id, independent of stock.
    ///
    /// Returns the number of rows affected; deleting a missing id is `Ok(0)`.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting order");

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
    use chrono::NaiveDate;
    use orderdesk_core::{Client, Product};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Inserts one client and one product, returning their assigned ids.
    async fn seed_refs(db: &Database) -> (i64, i64) {
        db.clients()
            .insert(&Client {
                client_id: 0,
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone_number: "0123456789".to_string(),
                address: "12 Analytical Row".to_string(),
            })
            .await
            .unwrap();
        db.products()
            .insert(&Product {
                product_id: 0,
                name: "Widget".to_string(),
                description: String::new(),
                price_cents: 499,
                stock_quantity: 10,
            })
            .await
            .unwrap();

        let client_id = db.clients().find_all().await.unwrap()[0].client_id;
        let product_id = db.products().find_all().await.unwrap()[0].product_id;
        (client_id, product_id)
    }

    fn sample_order(client_id: i64, product_id: i64) -> Order {
        Order {
            order_id: 0,
            client_id,
            product_id,
            quantity: 2,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = db().await;
        let (client_id, product_id) = seed_refs(&db).await;
        let repo = db.orders();

        repo.insert(&sample_order(client_id, product_id)).await.unwrap();

        let orders = repo.find_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].client_id, client_id);
        assert_eq!(orders[0].product_id, product_id);
        assert_eq!(orders[0].quantity, 2);
        assert_eq!(
            orders[0].order_date,
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
        );
    }

    #[tokio::test]
    async fn test_dangling_reference_rejected() {
        let db = db().await;

        let err = db.orders().insert(&sample_order(77, 88)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_order() {
        let db = db().await;
        let (client_id, product_id) = seed_refs(&db).await;
        let repo = db.orders();

        repo.insert(&sample_order(client_id, product_id)).await.unwrap();
        let mut stored = repo.find_all().await.unwrap().remove(0);

        stored.quantity = 5;
        repo.update(&stored).await.unwrap();

        assert_eq!(
            repo.find_by_id(stored.order_id).await.unwrap().unwrap(),
            stored
        );
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_stock() {
        let db = db().await;
        let (client_id, product_id) = seed_refs(&db).await;

        db.orders()
            .insert(&sample_order(client_id, product_id))
            .await
            .unwrap();
        let order_id = db.orders().find_all().await.unwrap()[0].order_id;

        assert_eq!(db.orders().delete(order_id).await.unwrap(), 1);

        // Stock stays whatever it was; order deletion never restores it.
        let product = db.products().find_by_id(product_id).await.unwrap().unwrap();
        assert_eq!(product.stock_quantity, 10);
    }

    #[tokio::test]
    async fn test_unreadable_date_fails_whole_find_all() {
        let db = db().await;
        let (client_id, product_id) = seed_refs(&db).await;

        db.orders()
            .insert(&sample_order(client_id, product_id))
            .await
            .unwrap();

        // A second row whose stored date cannot be reconstructed poisons the
        // whole read; no partial list comes back.
        sqlx::query(
            "INSERT INTO orders (client_id, product_id, quantity, order_date) \
             VALUES (?1, ?2, 1, 'not-a-date')",
        )
        .bind(client_id)
        .bind(product_id)
        .execute(db.pool())
        .await
        .unwrap();

        let err = db.orders().find_all().await.unwrap_err();
        assert!(matches!(err, DbError::Mapping { .. }));
    }
}
