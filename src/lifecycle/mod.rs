//! # System Lifecycle
//!
//! Starting, wiring and stopping the pieces of a running registry.
//!
//! - [`RegistrySystem`] spawns the Client and History actors and hands out an
//!   [`ActorStore`](crate::store::ActorStore) over them.
//! - [`setup_tracing`] installs the log subscriber, once per process.
//! - [`shutdown_signal`] resolves when the operator presses Ctrl-C.
//!
//! ## Graceful Shutdown
//!
//! Actors stop when every sender to their mailbox is gone. Shutting down is
//! therefore: drop everything holding a store (the service, the HTTP router),
//! then call [`RegistrySystem::shutdown`], which drops the system's own handles
//! and waits for both actor tasks to drain and exit.

pub mod registry_system;
pub mod signal;
pub mod tracing;

pub use registry_system::RegistrySystem;
pub use signal::shutdown_signal;
pub use self::tracing::setup_tracing;
