//! Typed handles over the generic [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each handle hides the message passing behind domain-named methods and maps
//! framework failures into its actor's error type. `get`, `list` and `delete`
//! come from [`ActorClient`](actor_framework::ActorClient).

pub mod client_handle;
pub mod history_handle;

pub use client_handle::*;
pub use history_handle::*;
