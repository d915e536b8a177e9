//! The closed set of failures a [`ClientService`](crate::service::ClientService)
//! operation can end in.

use crate::service::FieldError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more field rules were violated on a write.
    #[error("{}", join_messages(.0))]
    ValidationFailed(Vec<FieldError>),

    /// The referenced client, or the whole collection, has no data.
    #[error("{0}")]
    NotFound(String),

    /// Anything else: persistence failures, including a history append that
    /// failed after the primary write committed.
    #[error("{0}")]
    GenericFailure(#[from] StoreError),
}

impl ServiceError {
    /// Short name of the error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::ValidationFailed(_) => "validation_failed",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::GenericFailure(_) => "generic_failure",
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
