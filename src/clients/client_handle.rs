//! # Client Handle
//!
//! High-level API for the Client actor.
use crate::client_actor::ClientError;
use crate::model::{Client, ClientId, ClientInput};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Handle for interacting with the Client actor.
#[derive(Clone)]
pub struct ClientHandle {
    inner: ResourceClient<Client>,
}

impl ClientHandle {
    pub fn new(inner: ResourceClient<Client>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_client(&self, input: ClientInput) -> Result<ClientId, ClientError> {
        debug!("Sending request");
        self.inner.create(input).await.map_err(Self::map_error)
    }

    /// Replaces the stored fields, returning `None` if no client has this id.
    #[instrument(skip(self))]
    pub async fn update_client(
        &self,
        id: ClientId,
        input: ClientInput,
    ) -> Result<Option<Client>, ClientError> {
        debug!("Sending request");
        self.inner.update(id, input).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Client> for ClientHandle {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ClientError::ActorCommunicationError(e.to_string())
    }
}
