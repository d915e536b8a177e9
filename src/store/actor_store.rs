//! [`ClientStore`] backed by the Client and History actors.

use crate::clients::{ClientHandle, HistoryHandle};
use crate::model::{Client, ClientId, ClientInput, HistoryAppend, HistoryRecord, HistoryStatus};
use crate::store::{ClientStore, StoreError};
use actor_framework::ActorClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// In-memory store: one actor per table.
///
/// Cloning is cheap; clones talk to the same actors.
#[derive(Clone)]
pub struct ActorStore {
    clients: ClientHandle,
    history: HistoryHandle,
}

impl ActorStore {
    pub fn new(clients: ClientHandle, history: HistoryHandle) -> Self {
        Self { clients, history }
    }
}

#[async_trait]
impl ClientStore for ActorStore {
    async fn create_client(&self, input: ClientInput) -> Result<ClientId, StoreError> {
        Ok(self.clients.create_client(input).await?)
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.clients.list().await?)
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        Ok(self.clients.get(id).await?)
    }

    async fn update_client(
        &self,
        id: ClientId,
        input: ClientInput,
    ) -> Result<Option<Client>, StoreError> {
        Ok(self.clients.update_client(id, input).await?)
    }

    async fn delete_client(&self, id: ClientId) -> Result<bool, StoreError> {
        Ok(self.clients.delete(id).await?)
    }

    async fn append_history(
        &self,
        client_id: ClientId,
        status: HistoryStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.history
            .append(HistoryAppend {
                client_id,
                status,
                timestamp,
            })
            .await?;
        Ok(())
    }

    async fn list_history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(self.history.list().await?)
    }
}
