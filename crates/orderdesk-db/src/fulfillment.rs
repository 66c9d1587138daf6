//! # Order Fulfillment Operation
//!
//! Composes the product and order repositories to check stock, reserve it,
//! and record a new order.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Fulfillment Lifecycle                               │
//! │                                                                         │
//! │  Checking ──────► Reserving ──────► Recording ──────► Done             │
//! │     │                                                                   │
//! │     └──► Rejected   (qty <= 0, stock < qty, or stock == 0;             │
//! │                      zero mutation, user-facing reason)                 │
//! │                                                                         │
//! │  fulfill():        Reserving and Recording are two independent         │
//! │                    statements. A failure between them leaves stock     │
//! │                    decremented with no matching order - a documented   │
//! │                    consistency gap, surfaced loudly, never masked.     │
//! │                                                                         │
//! │  fulfill_atomic(): Reserving and Recording run in one store            │
//! │                    transaction with the stock re-checked inside it;    │
//! │                    any failure rolls the whole reservation back.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `fulfill` preserves the tool's observed semantics and is the default;
//! `fulfill_atomic` is the opt-in variant that closes the gap and also
//! guards against concurrent external writers racing the check.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::error::{DbError, DbResult};
use crate::repository::order::{self, OrderRepository};
use crate::repository::product::ProductRepository;
use orderdesk_core::validation::validate_quantity;
use orderdesk_core::{Client, Order, Product};

/// Rejection reason shown when the requested quantity cannot be served from
/// current stock.
const REASON_OUT_OF_STOCK: &str = "Not enough stock or the quantity is not correct";

/// Phases of one fulfillment attempt, in order. Logged as the operation
/// advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentState {
    Checking,
    Reserving,
    Recording,
    Done,
    Rejected,
}

/// The outcome of a fulfillment attempt.
///
/// A rejection is a business outcome, not an error: the request was
/// understood, checked, and turned down with zero mutation. Store failures
/// still surface as `Err(DbError)`.
#[derive(Debug, Clone, PartialEq)]
pub enum FulfillmentOutcome {
    /// Stock was reserved and the order recorded.
    Completed {
        /// Product stock after the reservation (`prior - quantity`).
        remaining_stock: i64,
    },
    /// The request failed a check before any mutation.
    Rejected {
        /// User-facing reason, ready for the presentation layer.
        reason: String,
    },
}

impl FulfillmentOutcome {
    fn rejected(reason: impl Into<String>) -> Self {
        FulfillmentOutcome::Rejected {
            reason: reason.into(),
        }
    }

    /// True when the attempt completed and mutated the store.
    pub fn is_completed(&self) -> bool {
        matches!(self, FulfillmentOutcome::Completed { .. })
    }
}

/// The order fulfillment operation.
///
/// ## Usage
/// ```rust,ignore
/// let outcome = db.fulfillment().fulfill(&client, &product, 3).await?;
/// match outcome {
///     FulfillmentOutcome::Completed { remaining_stock } => { /* refresh UI */ }
///     FulfillmentOutcome::Rejected { reason } => { /* show reason */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Fulfillment {
    pool: SqlitePool,
    products: ProductRepository,
    orders: OrderRepository,
}

impl Fulfillment {
    /// Creates the fulfillment operation over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Fulfillment {
            products: ProductRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            pool,
        }
    }

    /// Fulfills an order: check, reserve stock, record the order.
    ///
    /// Checks run against the caller's `product` snapshot, and Reserving and
    /// Recording are two independent statements - the tool's observed
    /// semantics. If Recording fails after Reserving succeeded the error is
    /// returned and logged at ERROR with the full context; the decrement is
    /// not rolled back. Use [`Fulfillment::fulfill_atomic`] to close that
    /// gap.
    ///
    /// The order is dated with the current calendar date.
    pub async fn fulfill(
        &self,
        client: &Client,
        product: &Product,
        quantity: i64,
    ) -> DbResult<FulfillmentOutcome> {
        debug!(
            state = ?FulfillmentState::Checking,
            client_id = client.client_id,
            product_id = product.product_id,
            quantity,
            "Fulfilling order"
        );

        if let Err(rule) = validate_quantity(quantity) {
            debug!(state = ?FulfillmentState::Rejected, reason = %rule, "Order rejected");
            return Ok(FulfillmentOutcome::rejected(rule.to_string()));
        }

        if !product.can_reserve(quantity) {
            debug!(
                state = ?FulfillmentState::Rejected,
                stock = product.stock_quantity,
                quantity,
                "Order rejected"
            );
            return Ok(FulfillmentOutcome::rejected(REASON_OUT_OF_STOCK));
        }

        debug!(state = ?FulfillmentState::Reserving, "Reserving stock");
        let remaining = product.stock_quantity - quantity;
        self.products
            .update_stock(product.product_id, remaining)
            .await?;

        debug!(state = ?FulfillmentState::Recording, "Recording order");
        let order = Order {
            order_id: 0,
            client_id: client.client_id,
            product_id: product.product_id,
            quantity,
            order_date: Utc::now().date_naive(),
        };

        if let Err(err) = self.orders.insert(&order).await {
            // The known partial-failure case: stock is already decremented
            // and no matching order exists.
            error!(
                product_id = product.product_id,
                quantity,
                error = %err,
                "order recording failed after stock was reserved; \
                 stock is decremented with no matching order"
            );
            return Err(err);
        }

        debug!(state = ?FulfillmentState::Done, remaining_stock = remaining, "Order fulfilled");
        Ok(FulfillmentOutcome::Completed {
            remaining_stock: remaining,
        })
    }

    /// Fulfills an order inside a single store transaction.
    ///
    /// The stock is re-read inside the transaction (not trusted from any
    /// caller snapshot), the decrement and the order insert commit together,
    /// and any failure rolls the whole reservation back.
    ///
    /// ## Returns
    /// * `Ok(Completed)` - stock reserved and order recorded
    /// * `Ok(Rejected)` - a check failed; nothing committed
    /// * `Err(DbError::NotFound)` - the product does not exist
    pub async fn fulfill_atomic(
        &self,
        client_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> DbResult<FulfillmentOutcome> {
        debug!(
            state = ?FulfillmentState::Checking,
            client_id,
            product_id,
            quantity,
            "Fulfilling order (atomic)"
        );

        if let Err(rule) = validate_quantity(quantity) {
            debug!(state = ?FulfillmentState::Rejected, reason = %rule, "Order rejected");
            return Ok(FulfillmentOutcome::rejected(rule.to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let stock: Option<i64> =
            sqlx::query_scalar("SELECT stock_quantity FROM product WHERE product_id = ?1")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DbError::from_sqlx("product", "fulfill_atomic", e))?;

        let Some(stock) = stock else {
            return Err(DbError::not_found("Product", product_id));
        };

        if stock == 0 || stock < quantity {
            debug!(state = ?FulfillmentState::Rejected, stock, quantity, "Order rejected");
            tx.rollback().await?;
            return Ok(FulfillmentOutcome::rejected(REASON_OUT_OF_STOCK));
        }

        debug!(state = ?FulfillmentState::Reserving, "Reserving stock");
        sqlx::query("UPDATE product SET stock_quantity = stock_quantity - ?1 WHERE product_id = ?2")
            .bind(quantity)
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_sqlx("product", "fulfill_atomic", e))?;

        debug!(state = ?FulfillmentState::Recording, "Recording order");
        sqlx::query(order::INSERT)
            .bind(client_id)
            .bind(product_id)
            .bind(quantity)
            .bind(Utc::now().date_naive())
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_sqlx("orders", "fulfill_atomic", e))?;

        tx.commit().await?;

        let remaining = stock - quantity;
        debug!(state = ?FulfillmentState::Done, remaining_stock = remaining, "Order fulfilled");
        Ok(FulfillmentOutcome::Completed {
            remaining_stock: remaining,
        })
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

    /// Inserts a client and a product with the given stock, returning both
    /// as stored (with assigned ids).
    async fn seed(db: &Database, stock: i64) -> (Client, Product) {
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
                stock_quantity: stock,
            })
            .await
            .unwrap();

        let client = db.clients().find_all().await.unwrap().remove(0);
        let product = db.products().find_all().await.unwrap().remove(0);
        (client, product)
    }

    async fn current_stock(db: &Database, product_id: i64) -> i64 {
        db.products()
            .find_by_id(product_id)
            .await
            .unwrap()
            .unwrap()
            .stock_quantity
    }

    #[tokio::test]
    async fn test_fulfill_reserves_stock_and_records_order() {
        let db = db().await;
        let (client, product) = seed(&db, 10).await;

        let outcome = db.fulfillment().fulfill(&client, &product, 3).await.unwrap();
        assert_eq!(outcome, FulfillmentOutcome::Completed { remaining_stock: 7 });

        assert_eq!(current_stock(&db, product.product_id).await, 7);

        let orders = db.orders().find_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].client_id, client.client_id);
        assert_eq!(orders[0].product_id, product.product_id);
        assert_eq!(orders[0].quantity, 3);
        assert_eq!(orders[0].order_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_fulfill_entire_stock_is_accepted() {
        let db = db().await;
        let (client, product) = seed(&db, 10).await;

        let outcome = db
            .fulfillment()
            .fulfill(&client, &product, 10)
            .await
            .unwrap();
        assert_eq!(outcome, FulfillmentOutcome::Completed { remaining_stock: 0 });

        assert_eq!(current_stock(&db, product.product_id).await, 0);
        assert_eq!(db.orders().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fulfill_rejects_excess_quantity_without_mutation() {
        let db = db().await;
        let (client, product) = seed(&db, 5).await;

        let outcome = db.fulfillment().fulfill(&client, &product, 6).await.unwrap();
        assert!(matches!(outcome, FulfillmentOutcome::Rejected { .. }));

        assert_eq!(current_stock(&db, product.product_id).await, 5);
        assert!(db.orders().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_rejects_non_positive_quantity() {
        let db = db().await;
        let (client, product) = seed(&db, 5).await;
        let fulfillment = db.fulfillment();

        for quantity in [0, -1] {
            let outcome = fulfillment
                .fulfill(&client, &product, quantity)
                .await
                .unwrap();
            assert!(!outcome.is_completed());
        }

        assert_eq!(current_stock(&db, product.product_id).await, 5);
        assert!(db.orders().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_rejects_empty_stock() {
        let db = db().await;
        let (client, product) = seed(&db, 0).await;

        let outcome = db.fulfillment().fulfill(&client, &product, 1).await.unwrap();
        assert!(matches!(outcome, FulfillmentOutcome::Rejected { .. }));
        assert!(db.orders().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_atomic_reserves_and_records() {
        let db = db().await;
        let (client, product) = seed(&db, 10).await;

        let outcome = db
            .fulfillment()
            .fulfill_atomic(client.client_id, product.product_id, 10)
            .await
            .unwrap();
        assert_eq!(outcome, FulfillmentOutcome::Completed { remaining_stock: 0 });

        assert_eq!(current_stock(&db, product.product_id).await, 0);
        assert_eq!(db.orders().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fulfill_atomic_ignores_stale_snapshots() {
        let db = db().await;
        let (client, product) = seed(&db, 2).await;

        // A competing writer drains the stock after our caller last looked.
        db.products()
            .update_stock(product.product_id, 0)
            .await
            .unwrap();

        let outcome = db
            .fulfillment()
            .fulfill_atomic(client.client_id, product.product_id, 1)
            .await
            .unwrap();
        assert!(matches!(outcome, FulfillmentOutcome::Rejected { .. }));
        assert!(db.orders().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_atomic_rejects_without_mutation() {
        let db = db().await;
        let (client, product) = seed(&db, 5).await;
        let fulfillment = db.fulfillment();

        for quantity in [0, -4, 6] {
            let outcome = fulfillment
                .fulfill_atomic(client.client_id, product.product_id, quantity)
                .await
                .unwrap();
            assert!(!outcome.is_completed());
        }

        assert_eq!(current_stock(&db, product.product_id).await, 5);
        assert!(db.orders().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_atomic_missing_product() {
        let db = db().await;
        let (client, _) = seed(&db, 5).await;

        let err = db
            .fulfillment()
            .fulfill_atomic(client.client_id, 404, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
