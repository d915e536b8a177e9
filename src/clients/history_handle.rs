//! # History Handle
//!
//! High-level API for the History actor. Only appends and reads are exposed.
use crate::history_actor::HistoryError;
use crate::model::{HistoryAppend, HistoryId, HistoryRecord};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Handle for interacting with the History actor.
#[derive(Clone)]
pub struct HistoryHandle {
    inner: ResourceClient<HistoryRecord>,
}

impl HistoryHandle {
    pub fn new(inner: ResourceClient<HistoryRecord>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn append(&self, entry: HistoryAppend) -> Result<HistoryId, HistoryError> {
        debug!("Sending request");
        self.inner.create(entry).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<HistoryRecord> for HistoryHandle {
    type Error = HistoryError;

    fn inner(&self) -> &ResourceClient<HistoryRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        HistoryError::ActorCommunicationError(e.to_string())
    }
}
