//! # orderdesk-db: Database Layer for Orderdesk
//!
//! This crate provides database access for the inventory/order tool.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Orderdesk Data Flow                              │
//! │                                                                         │
//! │  Presentation call (e.g. list clients, finalize order)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  orderdesk-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │   │  Mapper<T> +   │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │◄──│  Repositories  │   │  (embedded)  │   │   │
//! │  │   │   SqlitePool  │   │  Fulfillment   │   │ 001_init.sql │   │   │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (single source of truth)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection provider: configuration and pool lifecycle
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`mapper`] - Generic record mapper shared by all repositories
//! - [`repository`] - Entity repositories (client, product, order)
//! - [`fulfillment`] - The order fulfillment operation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orderdesk_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/orderdesk.db")).await?;
//!
//! let clients = db.clients().find_all().await?;
//! let outcome = db.fulfillment().fulfill(&client, &product, 3).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fulfillment;
pub mod mapper;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use fulfillment::{Fulfillment, FulfillmentOutcome};
pub use mapper::{Mapper, Record, SqlValue};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
