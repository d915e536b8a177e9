//! # Persistence
//!
//! [`ClientStore`] is the persistence contract the service depends on. It owns
//! durable state for clients and their history; the service holds none.
//!
//! Two implementations ship with the crate:
//! - [`ActorStore`]: both tables live in resource actors, in memory.
//! - [`SqliteStore`]: a SQLite file (or in-memory database) with the same two tables.
//!
//! Stores do not classify their failures. Absence is reported as `None` or
//! `false`; everything else is a [`StoreError`] for the service to interpret.

pub mod actor_store;
pub mod error;
pub mod sqlite;

pub use actor_store::ActorStore;
pub use error::StoreError;
pub use sqlite::SqliteStore;

use crate::model::{Client, ClientId, ClientInput, HistoryRecord, HistoryStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Persists a new client and returns its freshly assigned id.
    async fn create_client(&self, input: ClientInput) -> Result<ClientId, StoreError>;

    /// All clients in insertion order.
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError>;

    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError>;

    /// Conditional replace: `None` when no client matched `id`.
    async fn update_client(
        &self,
        id: ClientId,
        input: ClientInput,
    ) -> Result<Option<Client>, StoreError>;

    /// `true` iff a client was removed.
    async fn delete_client(&self, id: ClientId) -> Result<bool, StoreError>;

    async fn append_history(
        &self,
        client_id: ClientId,
        status: HistoryStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// All history records in append order.
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, StoreError>;
}
