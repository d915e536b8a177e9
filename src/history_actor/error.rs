//! Error types for the History actor.

use crate::model::HistoryId;
use thiserror::Error;

/// Errors that can occur during history operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    /// An attempt was made to rewrite an existing record.
    #[error("History record {0} is append-only")]
    AppendOnly(HistoryId),

    /// The actor could not be reached or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for HistoryError {
    fn from(msg: String) -> Self {
        HistoryError::ActorCommunicationError(msg)
    }
}
