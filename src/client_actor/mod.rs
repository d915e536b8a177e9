//! # Client Actor
//!
//! The in-memory home of [`Client`] records: an [`ActorEntity`](actor_framework::ActorEntity)
//! implementation plus a factory that starts nothing but returns the actor and
//! its [`ClientHandle`].
//!
//! ```rust
//! use client_registry::client_actor;
//! use client_registry::model::ClientInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, handle) = client_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = handle.create_client(ClientInput::new("Ada", 36, "first")).await?;
//!     assert_eq!(id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ClientHandle;
use crate::model::Client;
use actor_framework::ResourceActor;

/// Creates a new Client actor and its handle.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ClientHandle) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ClientHandle::new(generic_client))
}
