//! # Framework Errors
//!
//! Errors raised by the resource actor machinery itself. Absence of an entity
//! is not an error here: `get` and `update` answer `None`, `delete` answers
//! `false`, and the caller decides what "missing" means in its domain.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// Every id the counter can produce has been handed out.
    #[error("Actor has no ids left")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
