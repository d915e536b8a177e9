//! [`ActorEntity`] implementation for [`HistoryRecord`].

use crate::history_actor::HistoryError;
use crate::model::{HistoryAppend, HistoryId, HistoryRecord};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for HistoryRecord {
    type Id = HistoryId;
    type Create = HistoryAppend;
    type Update = ();
    type Context = ();
    type Error = HistoryError;

    fn from_create_params(id: HistoryId, params: HistoryAppend) -> Result<Self, Self::Error> {
        Ok(HistoryRecord {
            id,
            client_id: params.client_id,
            status: params.status,
            timestamp: params.timestamp,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(HistoryError::AppendOnly(self.id))
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(HistoryError::AppendOnly(self.id))
    }
}
