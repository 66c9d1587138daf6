//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds table/operation context                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer ← Translates to a user-facing message              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Taxonomy
//! - [`DbError::ConnectionFailed`] - store unreachable, operation aborted
//! - [`DbError::QueryFailed`] - statement execution error
//! - [`DbError::Mapping`] - row-to-record reconstruction error
//!
//! All three are logged where they arise with the originating table name and
//! operation, and none is retried automatically. Validation failures live in
//! orderdesk-core and never reach this module.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Statement execution failed.
    #[error("{table}.{operation} failed: {message}")]
    QueryFailed {
        table: String,
        operation: String,
        message: String,
    },

    /// Row-to-record reconstruction failed.
    ///
    /// ## When This Occurs
    /// - A stored value's runtime type is incompatible with the field
    /// - A result column expected by the record is missing
    ///
    /// A mapping failure fails the whole read call; partially mapped result
    /// sets are never returned.
    #[error("Row mapping failed for {table}: {message}")]
    Mapping { table: String, message: String },

    /// Entity not found where one was required.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting an order referencing a missing client or product
    /// - Deleting a client the store still has orders for
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Classifies a sqlx error for a statement against `table`.
    ///
    /// ## Error Mapping
    /// ```text
    /// ColumnDecode / ColumnNotFound / Decode → DbError::Mapping
    /// Database (FK constraint)               → DbError::ForeignKeyViolation
    /// PoolTimedOut                           → DbError::PoolExhausted
    /// PoolClosed                             → DbError::ConnectionFailed
    /// Other                                  → DbError::QueryFailed
    /// ```
    pub(crate) fn from_sqlx(table: &str, operation: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => DbError::Mapping {
                table: table.to_string(),
                message: err.to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                // SQLite reports constraint errors by message text:
                // "FOREIGN KEY constraint failed"
                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation { message: msg }
                } else {
                    DbError::QueryFailed {
                        table: table.to_string(),
                        operation: operation.to_string(),
                        message: msg,
                    }
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            other => DbError::QueryFailed {
                table: table.to_string(),
                operation: operation.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Fallback conversion for statements run outside the mapper (transactions).
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
