//! # Actor Framework
//!
//! Building blocks for keeping resources in memory behind actors. Each resource
//! type gets one [`ResourceActor`] that owns its entities and processes requests
//! strictly one at a time; the rest of the program talks to it through a
//! cloneable [`ResourceClient`].
//!
//! The surface is that of a table: create, get, list,
//! update, delete. Absence is an answer (`None` / `false`), not an error, so
//! callers can map it to their own "not found" however their domain requires.
//!
//! ## Core Concepts
//!
//! - [`ActorEntity`]: what a stored resource must provide (id, payload types,
//!   lifecycle hooks).
//! - [`ResourceActor`]: the server loop and the entity map.
//! - [`ResourceClient`]: the typed request sender.
//! - [`ActorClient`]: a trait that gives resource-specific handles `get`,
//!   `list` and `delete` for free.
//! - [`mock::MockClient`]: scripted answers for tests.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests to one actor are serialized; actors run in parallel with each other.
//! - No shared mutable state, only message passing.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor is started with `run(context)`,
//! not when it is built. Entities without dependencies use `()`.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
