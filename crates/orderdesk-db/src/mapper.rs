//! # Generic Record Mapper
//!
//! One mapper, many entities: [`Mapper<T>`] executes the shared
//! insert/update/delete/find statements for any record type that registers a
//! mapping through the [`Record`] trait.
//!
//! ## Mapping Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                How a record type plugs into the mapper                  │
//! │                                                                         │
//! │  impl Record for Client                                                │
//! │  ├── TABLE     = "client"          ← statement text interpolation      │
//! │  ├── ID_COLUMN = "client_id"       ← find_by_id / delete key           │
//! │  ├── values()  → Vec<SqlValue>     ← (Record) -> column values         │
//! │  └── FromRow   (orderdesk-core)    ← (row) -> Record                   │
//! │                                                                         │
//! │  Mapper<Client>                                                        │
//! │  ├── execute(op, sql, params)      ← insert / update / update_stock    │
//! │  ├── find_all()                    ← SELECT * FROM client              │
//! │  ├── find_by_id(id)                ← ... WHERE client_id = ?1          │
//! │  └── delete(id)                    ← DELETE ... WHERE client_id = ?1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Table and column names are interpolated into statement text only from the
//! `Record` constants, never from caller input; every value travels through a
//! `?N` placeholder.

use std::marker::PhantomData;

use chrono::NaiveDate;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};
use tracing::warn;

use crate::error::{DbError, DbResult};

// =============================================================================
// Record Trait
// =============================================================================

/// The compile-time mapping table for one record type.
///
/// The `FromRow` supertrait supplies the row-to-record half (implemented next
/// to the types in orderdesk-core); this trait adds the table identity and
/// the record-to-values half.
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Table the record maps to.
    const TABLE: &'static str;

    /// Primary key column, named `<table>_id`.
    const ID_COLUMN: &'static str;

    /// Store-assigned identifier (0 until inserted).
    fn id(&self) -> i64;

    /// Column values in declared order, identifier excluded.
    ///
    /// These are exactly the positional parameters of the repository's
    /// insert statement; update statements append the id.
    fn values(&self) -> Vec<SqlValue>;
}

// =============================================================================
// Parameter Values
// =============================================================================

/// A positional statement parameter.
///
/// The typed stand-in for the original design's untyped parameter list: each
/// repository builds a `Vec<SqlValue>` and the mapper binds them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
    Date(NaiveDate),
    Null,
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl SqlValue {
    /// Binds this value as the next positional parameter.
    fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Date(v) => query.bind(*v),
            SqlValue::Null => query.bind(None::<i64>),
        }
    }
}

// =============================================================================
// Mapper
// =============================================================================

/// Generic statement executor for one record type.
///
/// Each call checks a connection out of the pool, performs exactly one
/// logical unit of work, and returns the connection on every exit path.
#[derive(Debug, Clone)]
pub struct Mapper<T: Record> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Mapper<T> {
    /// Creates a mapper over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Mapper {
            pool,
            _record: PhantomData,
        }
    }

    /// Executes a caller-supplied parameterized statement.
    ///
    /// Used for insert and update; the statement text comes from the
    /// repository's constants and `params` are bound positionally. Returns
    /// the number of rows affected. The generated identifier is **not**
    /// returned; callers re-fetch when they need it.
    pub async fn execute(
        &self,
        operation: &str,
        sql: &str,
        params: &[SqlValue],
    ) -> DbResult<u64> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = param.bind(query);
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| Self::report(operation, e))?;

        Ok(result.rows_affected())
    }

    /// Fetches every row of the table.
    ///
    /// An empty table yields an empty vec, not an error. A row that cannot
    /// be reconstructed fails the whole call with [`DbError::Mapping`];
    /// partial result sets are never returned.
    pub async fn find_all(&self) -> DbResult<Vec<T>> {
        let sql = format!("SELECT * FROM {}", T::TABLE);

        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::report("find_all", e))
    }

    /// Fetches a single record by primary key; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN);

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::report("find_by_id", e))
    }

    /// Deletes a record by primary key.
    ///
    /// Returns the number of rows affected: deleting a missing id is `Ok(0)`,
    /// indistinguishable from a repeated delete. Never an error.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        let sql = format!("DELETE FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::report("delete", e))?;

        Ok(result.rows_affected())
    }

    /// Classifies and logs a statement failure with its table and operation.
    fn report(operation: &str, err: sqlx::Error) -> DbError {
        let err = DbError::from_sqlx(T::TABLE, operation, err);
        warn!(table = T::TABLE, operation, error = %err, "statement failed");
        err
    }
}
