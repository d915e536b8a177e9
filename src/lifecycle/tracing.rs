//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG` (default `info`).
//!
//! ```bash
//! RUST_LOG=info cargo run            # one line per operation outcome
//! RUST_LOG=debug cargo run           # plus actor requests and payloads
//! RUST_LOG=client_registry=debug,actor_framework=info cargo run
//! ```
//!
//! What shows up where:
//!
//! - **Actors**: start, shutdown, and every Create / Update / Delete with the
//!   entity type and id (`info`), lookups and payloads (`debug`).
//! - **Service**: one line per operation, `info` on success, `warn` for
//!   validation and not-found outcomes, `error` for anything else.
//! - **HTTP**: server-side failures again at `error`, with the status code.
//!
//! Spans from `#[instrument]` on service operations and actor handles nest, so
//! with `debug` enabled a single request reads as
//! `create:create_client: Sending request` followed by the actor's `Created`.
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
