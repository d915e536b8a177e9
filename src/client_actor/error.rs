//! Error types for the Client actor.

use thiserror::Error;

/// Errors that can occur while talking to the Client actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The actor could not be reached or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ClientError {
    fn from(msg: String) -> Self {
        ClientError::ActorCommunicationError(msg)
    }
}
