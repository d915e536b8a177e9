//! # History Actor
//!
//! Holds the operation history. Records can be appended, listed and fetched;
//! the entity refuses updates, so the log stays append-only even though it runs
//! on the generic resource actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::HistoryHandle;
use crate::model::HistoryRecord;
use actor_framework::ResourceActor;

/// Creates a new History actor and its handle.
pub fn new(buffer_size: usize) -> (ResourceActor<HistoryRecord>, HistoryHandle) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, HistoryHandle::new(generic_client))
}
