//! # Client Registry
//!
//! Client records with an append-only operation history, served over HTTP.
//!
//! A request travels `http` → [`ClientService`](service::ClientService) →
//! validator → [`ClientStore`](store::ClientStore) → history append → result,
//! and any failure comes back as one of three
//! [`ServiceError`](service::ServiceError) kinds that the HTTP layer maps to
//! `400`, `404` or `500`.
//!
//! ## Module Tour
//!
//! - [`model`]: `Client`, `ClientInput`, `HistoryRecord` and their ids.
//! - [`service`]: validation rules, the operation pipeline, the error taxonomy.
//! - [`store`]: the persistence contract, with an in-memory actor store and a
//!   SQLite store.
//! - [`client_actor`], [`history_actor`], [`clients`]: the two resource actors
//!   behind the in-memory store and their typed handles, built on
//!   [`actor_framework`].
//! - [`http`]: axum routes and the error-to-status mapping.
//! - [`lifecycle`]: spawning and stopping the actors, tracing setup.
//! - [`config`]: runtime settings.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --listen 127.0.0.1:8080
//! RUST_LOG=info cargo run -- --database clients.db
//! ```

pub mod client_actor;
pub mod clients;
pub mod config;
pub mod history_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;

pub use config::Config;
