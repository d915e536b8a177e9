use crate::clients::{ClientHandle, HistoryHandle};
use crate::store::ActorStore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running in-memory registry: both actors plus their handles.
///
/// # Example
///
/// ```rust
/// use client_registry::lifecycle::RegistrySystem;
/// use client_registry::model::ClientInput;
/// use client_registry::service::ClientService;
///
/// #[tokio::main]
/// async fn main() {
///     let system = RegistrySystem::new(32);
///     let service = ClientService::with_store(system.store());
///
///     let id = service.create(ClientInput::new("Ada", 36, "first")).await.unwrap();
///     assert_eq!(service.get_by_id(id).await.unwrap().name, "Ada");
///
///     drop(service);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct RegistrySystem {
    pub client_handle: ClientHandle,
    pub history_handle: HistoryHandle,
    handles: Vec<JoinHandle<()>>,
}

impl RegistrySystem {
    /// Spawns the Client and History actors with `mailbox_size` capacity each.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(mailbox_size: usize) -> Self {
        let (client_actor, client_handle) = crate::client_actor::new(mailbox_size);
        let (history_actor, history_handle) = crate::history_actor::new(mailbox_size);

        let handles = vec![
            tokio::spawn(client_actor.run(())),
            tokio::spawn(history_actor.run(())),
        ];

        Self {
            client_handle,
            history_handle,
            handles,
        }
    }

    /// A store over this system's actors.
    pub fn store(&self) -> ActorStore {
        ActorStore::new(self.client_handle.clone(), self.history_handle.clone())
    }

    /// Drops the system's handles and waits for both actors to exit.
    ///
    /// Stores obtained from [`RegistrySystem::store`] keep the actors alive;
    /// drop them first or this waits for them.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down registry...");

        drop(self.client_handle);
        drop(self.history_handle);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
