//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server half of a resource. It owns
//! the entity map, processes requests one at a time, and is the only code that
//! ever touches that map.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Each actor runs in its own Tokio task and drains its mailbox sequentially, so
/// the `store` needs no lock. Clients talk to it through a [`ResourceClient`].
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.text })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     assert!(client.delete(id).await.unwrap());
///     assert!(!client.delete(id).await.unwrap());
/// }
/// ```
///
/// # Implementation Details
///
/// Entities live in a `BTreeMap` keyed by id, and ids come from a `u32` counter
/// that only moves forward. Listing therefore returns entities in creation
/// order, and an id freed by a delete is never handed out again. Once the
/// counter is spent, creates fail with [`FrameworkError::IdsExhausted`].
///
/// * **Create**: allocate id, `from_create_params`, `on_create`, insert.
/// * **Update**: clone the stored entity, run `on_update` on the clone, and only
///   replace the stored value if the hook succeeded.
/// * **Delete**: `on_delete`, then remove.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; once it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    let mut next = current.clone();
                    match next.on_update(update, &context).await {
                        Ok(()) => {
                            self.store.insert(id.clone(), next.clone());
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(Some(next)));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Ok(false));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(true));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let raw = self.next_id.ok_or(FrameworkError::IdsExhausted)?;
        self.next_id = raw.checked_add(1);
        let id = T::Id::from(raw);

        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Counter {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = ();
        type Update = ();
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, _params: ()) -> Result<Self, Self::Error> {
            Ok(Self { id })
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_exhausted_counter_refuses_creates_without_wrapping() {
        let (mut actor, client) = ResourceActor::<Counter>::new(4);
        actor.next_id = Some(u32::MAX - 1);
        tokio::spawn(actor.run(()));

        assert_eq!(client.create(()).await.unwrap(), u32::MAX - 1);
        assert_eq!(client.create(()).await.unwrap(), u32::MAX);
        assert!(client.delete(u32::MAX).await.unwrap());

        let result = client.create(()).await;
        assert!(matches!(result, Err(FrameworkError::IdsExhausted)));

        let ids: Vec<u32> = client.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![u32::MAX - 1]);
    }
}
