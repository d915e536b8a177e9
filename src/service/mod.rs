//! # Client Service
//!
//! The request pipeline: validate, persist, append history, classify.
//!
//! [`ClientService`] holds no state of its own, only handles to a
//! [`ClientStore`] and a [`Validate`] implementation supplied by the caller, so
//! one instance can serve any number of concurrent requests.
//!
//! History appends are a second, separate store call made only after the
//! primary write succeeded. They are not atomic with it: if the append fails,
//! the write stays committed and the caller gets a
//! [`ServiceError::GenericFailure`].

pub mod error;
pub mod validator;

pub use error::ServiceError;
pub use validator::{ClientValidator, FieldError, Validate, ValidationResult};

use crate::model::{Client, ClientId, ClientInput, HistoryRecord, HistoryStatus};
use crate::store::ClientStore;
use chrono::Utc;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn ClientStore>,
    validator: Arc<dyn Validate>,
}

impl ClientService {
    pub fn new(store: Arc<dyn ClientStore>, validator: Arc<dyn Validate>) -> Self {
        Self { store, validator }
    }

    /// A service over `store` using the standard [`ClientValidator`].
    pub fn with_store(store: impl ClientStore + 'static) -> Self {
        Self::new(Arc::new(store), Arc::new(ClientValidator))
    }

    /// Validates and stores a new client, then records `ClientCreated`.
    #[instrument(skip(self))]
    pub async fn create(&self, input: ClientInput) -> Result<ClientId, ServiceError> {
        classify("create", async {
            self.check(&input)?;
            let id = self.store.create_client(input).await?;
            self.record(id, HistoryStatus::ClientCreated).await?;
            Ok(id)
        })
        .await
    }

    /// Every client, oldest first. An empty collection is `NotFound`.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Client>, ServiceError> {
        classify("list", async {
            let clients = self.store.list_clients().await?;
            if clients.is_empty() {
                return Err(ServiceError::NotFound("No clients found".to_string()));
            }
            Ok(clients)
        })
        .await
    }

    /// The client's fields without its id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ClientId) -> Result<ClientInput, ServiceError> {
        classify("get_by_id", async {
            let client = self
                .store
                .get_client(id)
                .await?
                .ok_or_else(|| not_found(id))?;
            Ok(client.to_input())
        })
        .await
    }

    /// Validates and replaces an existing client, then records `ClientEdited`.
    #[instrument(skip(self))]
    pub async fn update_by_id(&self, id: ClientId, input: ClientInput) -> Result<(), ServiceError> {
        classify("update_by_id", async {
            self.check(&input)?;
            self.store
                .update_client(id, input)
                .await?
                .ok_or_else(|| not_found(id))?;
            self.record(id, HistoryStatus::ClientEdited).await
        })
        .await
    }

    /// Removes a client, then records `ClientDeleted`.
    ///
    /// The client is fetched first so the log line carries what was removed. A
    /// delete that then removes nothing (someone else got there first) is still
    /// `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ClientId) -> Result<(), ServiceError> {
        classify("delete_by_id", async {
            let snapshot = self
                .store
                .get_client(id)
                .await?
                .ok_or_else(|| not_found_for_delete(id))?;
            if !self.store.delete_client(id).await? {
                return Err(not_found_for_delete(id));
            }
            self.record(id, HistoryStatus::ClientDeleted).await?;
            debug!(?snapshot, "Removed");
            Ok(())
        })
        .await
    }

    /// The full operation history. An empty log is `NotFound`.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
        classify("history", async {
            let history = self.store.list_history().await?;
            if history.is_empty() {
                return Err(ServiceError::NotFound("No history found".to_string()));
            }
            Ok(history)
        })
        .await
    }

    fn check(&self, input: &ClientInput) -> Result<(), ServiceError> {
        let result = self.validator.validate(input);
        if result.is_valid() {
            Ok(())
        } else {
            Err(ServiceError::ValidationFailed(result.errors))
        }
    }

    async fn record(&self, id: ClientId, status: HistoryStatus) -> Result<(), ServiceError> {
        self.store.append_history(id, status, Utc::now()).await?;
        Ok(())
    }
}

/// `NotFound` for a lookup or update of `id`.
pub fn not_found(id: impl Display) -> ServiceError {
    ServiceError::NotFound(format!("No client found by this id: {id}"))
}

/// `NotFound` for a delete of `id`.
pub fn not_found_for_delete(id: impl Display) -> ServiceError {
    ServiceError::NotFound(format!("No client found to delete with this id: {id}"))
}

/// Runs one operation and logs its outcome by error kind.
///
/// Expected outcomes (`ValidationFailed`, `NotFound`) are warnings; a
/// `GenericFailure` is an error with its full source chain.
async fn classify<T>(
    operation: &'static str,
    work: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    let result = work.await;
    match &result {
        Ok(_) => info!(operation, "Succeeded"),
        Err(e @ ServiceError::GenericFailure(source)) => {
            error!(operation, kind = e.kind(), error = %e, source = ?source, "Failed")
        }
        Err(e) => warn!(operation, kind = e.kind(), error = %e, "Rejected"),
    }
    result
}
