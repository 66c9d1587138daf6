//! # Client Repository
//!
//! Database operations for clients.
//!
//! Validation is the caller's job (`orderdesk_core::validation`); this layer
//! only moves records. Referential integrity between clients and their
//! orders is deliberately not enforced here - deleting a client defers to
//! the store's foreign-key policy.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::mapper::{Mapper, Record, SqlValue};
use orderdesk_core::Client;

impl Record for Client {
    const TABLE: &'static str = "client";
    const ID_COLUMN: &'static str = "client_id";

    fn id(&self) -> i64 {
        self.client_id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.email.as_str().into(),
            self.phone_number.as_str().into(),
            self.address.as_str().into(),
        ]
    }
}

const INSERT: &str =
    "INSERT INTO client (name, email, phone_number, address) VALUES (?1, ?2, ?3, ?4)";

const UPDATE: &str =
    "UPDATE client SET name = ?1, email = ?2, phone_number = ?3, address = ?4 \
     WHERE client_id = ?5";

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    mapper: Mapper<Client>,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository {
            mapper: Mapper::new(pool),
        }
    }

    /// Fetches all clients.
    pub async fn find_all(&self) -> DbResult<Vec<Client>> {
        self.mapper.find_all().await
    }

    /// Fetches a client by id; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Client>> {
        self.mapper.find_by_id(id).await
    }

    /// Inserts a new client.
    ///
    /// The store assigns the identifier; it is not returned. Re-fetch when
    /// the new id is needed.
    pub async fn insert(&self, client: &Client) -> DbResult<()> {
        debug!(name = %client.name, "Inserting client");

        self.mapper.execute("insert", INSERT, &client.values()).await?;
        Ok(())
    }

    /// Updates an existing client (full-record replacement).
    pub async fn update(&self, client: &Client) -> DbResult<()> {
        debug!(id = client.id(), "Updating client");

        let mut params = client.values();
        params.push(client.id().into());

        let affected = self.mapper.execute("update", UPDATE, &params).await?;
        if affected == 0 {
            return Err(DbError::not_found("Client", client.id()));
        }

        Ok(())
    }

    /// Deletes a client by id.
    ///
    /// Returns the number of rows affected; deleting a missing id is `Ok(0)`.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting client");

        self.mapper.delete(id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
