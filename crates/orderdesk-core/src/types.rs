//! # Domain Types
//!
//! The three record types managed by the tool.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │   │     Product     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  client_id      │   │  product_id     │   │  order_id       │       │
//! │  │  name           │   │  name           │   │  client_id (FK) │       │
//! │  │  email          │   │  description    │   │  product_id(FK) │       │
//! │  │  phone_number   │   │  price_cents    │   │  quantity       │       │
//! │  │  address        │   │  stock_quantity │   │  order_date     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Identifiers are store-assigned integer keys. A record built for insertion
//! carries id `0` (unset); the store assigns the real key and callers re-fetch
//! when they need it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Client
// =============================================================================

/// A client that can place orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier (0 until inserted).
    pub client_id: i64,

    /// Display name, 3-44 characters.
    pub name: String,

    /// Email address, `local@domain`, at most 44 characters.
    pub email: String,

    /// Phone number, exactly 10 digits.
    pub phone_number: String,

    /// Postal address, 5-44 characters.
    pub address: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier (0 until inserted).
    pub product_id: i64,

    /// Display name, at most 44 characters.
    pub name: String,

    /// Free-text description, at most 44 characters.
    pub description: String,

    /// Price in cents (smallest currency unit). Never a float.
    pub price_cents: i64,

    /// Units currently in stock. Never negative; decremented only by the
    /// order fulfillment operation.
    pub stock_quantity: i64,
}

impl Product {
    /// Checks whether `quantity` units can be reserved from current stock.
    ///
    /// Matches the fulfillment Checking step: a positive request no larger
    /// than the available (non-zero) stock.
    pub fn can_reserve(&self, quantity: i64) -> bool {
        quantity > 0 && self.stock_quantity > 0 && self.stock_quantity >= quantity
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placing a quantity of one product for one client.
///
/// Deleting an order does **not** restore product stock. That mirrors the
/// tool's observed behavior and is deliberate, not an oversight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier (0 until inserted).
    pub order_id: i64,

    /// Client placing the order (foreign key).
    pub client_id: i64,

    /// Product being ordered (foreign key).
    pub product_id: i64,

    /// Units ordered, always positive.
    pub quantity: i64,

    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
}

// =============================================================================
// Row Mapping (feature = "sqlx")
// =============================================================================
// The explicit, compile-time-checked (row) -> Record half of the mapping
// table. Column names match field names case-sensitively; a NULL column
// leaves the field at its type's default; an incompatible stored value
// surfaces as a decode error for the store layer to classify.

#[cfg(feature = "sqlx")]
mod row {
    use super::{Client, Order, Product};
    use chrono::NaiveDate;
    use sqlx::sqlite::SqliteRow;
    use sqlx::{FromRow, Row};

    impl FromRow<'_, SqliteRow> for Client {
        fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
            Ok(Client {
                client_id: row.try_get::<Option<i64>, _>("client_id")?.unwrap_or_default(),
                name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
                email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
                phone_number: row
                    .try_get::<Option<String>, _>("phone_number")?
                    .unwrap_or_default(),
                address: row.try_get::<Option<String>, _>("address")?.unwrap_or_default(),
            })
        }
    }

    impl FromRow<'_, SqliteRow> for Product {
        fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
            Ok(Product {
                product_id: row
                    .try_get::<Option<i64>, _>("product_id")?
                    .unwrap_or_default(),
                name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
                description: row
                    .try_get::<Option<String>, _>("description")?
                    .unwrap_or_default(),
                price_cents: row
                    .try_get::<Option<i64>, _>("price_cents")?
                    .unwrap_or_default(),
                stock_quantity: row
                    .try_get::<Option<i64>, _>("stock_quantity")?
                    .unwrap_or_default(),
            })
        }
    }

    impl FromRow<'_, SqliteRow> for Order {
        fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
            Ok(Order {
                order_id: row.try_get::<Option<i64>, _>("order_id")?.unwrap_or_default(),
                client_id: row.try_get::<Option<i64>, _>("client_id")?.unwrap_or_default(),
                product_id: row
                    .try_get::<Option<i64>, _>("product_id")?
                    .unwrap_or_default(),
                quantity: row.try_get::<Option<i64>, _>("quantity")?.unwrap_or_default(),
                order_date: row
                    .try_get::<Option<NaiveDate>, _>("order_date")?
                    .unwrap_or_default(),
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_reserve() {
        let product = Product {
            product_id: 1,
            name: "Widget".to_string(),
            description: String::new(),
            price_cents: 499,
            stock_quantity: 10,
        };

        assert!(product.can_reserve(1));
        assert!(product.can_reserve(10));

        assert!(!product.can_reserve(0));
        assert!(!product.can_reserve(-3));
        assert!(!product.can_reserve(11));
    }

    #[test]
    fn test_can_reserve_empty_stock() {
        let product = Product {
            product_id: 1,
            name: "Widget".to_string(),
            description: String::new(),
            price_cents: 499,
            stock_quantity: 0,
        };

        assert!(!product.can_reserve(1));
    }
}
