//! Store errors.

use crate::client_actor::ClientError;
use crate::history_actor::HistoryError;
use thiserror::Error;

/// Failures reported by a [`ClientStore`](crate::store::ClientStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing actor or connection is gone.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A blocking database task panicked or was cancelled.
    #[error("store worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// A stored row could not be turned back into a domain value.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}

impl From<ClientError> for StoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
        }
    }
}

impl From<HistoryError> for StoreError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
            other => StoreError::Corrupt(other.to_string()),
        }
    }
}
