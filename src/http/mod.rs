//! # HTTP Boundary
//!
//! Routes requests to [`ClientService`] and serializes the answers.
//!
//! ## Routes
//!
//! - `POST /client` → `201 { "id": n }`
//! - `GET /client` → `200 [client, ...]`
//! - `GET /client/:id` → `200 { "name", "age", "comment" }`
//! - `PUT /client/:id` → `204`
//! - `DELETE /client/:id` → `200`
//! - `GET /history` → `200 [record, ...]`
//!
//! Failures go through [`ApiError`]: validation `400`, not found `404`,
//! anything else `500`. An `:id` that is an integer but names no possible
//! client (negative, or past `u32::MAX`) is a `404`; one that is not an
//! integer at all is a `400`.

pub mod error;

pub use error::{ApiError, ErrorBody};

use crate::model::{Client, ClientId, ClientInput, HistoryRecord};
use crate::service::{not_found, not_found_for_delete, ClientService, ServiceError};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};

/// Body returned by `POST /client`.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: ClientId,
}

/// Build the router for `service`.
pub fn router(service: ClientService) -> Router {
    Router::new()
        .route("/client", get(list_clients).post(create_client))
        .route(
            "/client/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/history", get(history))
        .with_state(service)
}

/// Serve `service` at `addr` until `shutdown` resolves.
pub async fn serve(
    service: ClientService,
    addr: &str,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}

type ApiResult<T> = Result<T, ApiError>;

async fn create_client(
    State(service): State<ClientService>,
    body: Result<Json<ClientInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let Json(input) = body?;
    let id = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

async fn list_clients(State(service): State<ClientService>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(service.list().await?))
}

/// Resolves a path id, answering ids outside the `ClientId` range with `missing`.
fn client_id(
    id: Result<Path<i64>, PathRejection>,
    missing: fn(i64) -> ServiceError,
) -> ApiResult<ClientId> {
    let Path(raw) = id?;
    ClientId::try_from(raw).map_err(|_| {
        warn!(id = raw, "Client id out of range");
        ApiError::from(missing(raw))
    })
}

async fn get_client(
    State(service): State<ClientService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ClientInput>> {
    let id = client_id(id, not_found)?;
    Ok(Json(service.get_by_id(id).await?))
}

async fn update_client(
    State(service): State<ClientService>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ClientInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(input) = body?;
    let id = client_id(id, not_found)?;
    service.update_by_id(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_client(
    State(service): State<ClientService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = client_id(id, not_found_for_delete)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

async fn history(State(service): State<ClientService>) -> ApiResult<Json<Vec<HistoryRecord>>> {
    Ok(Json(service.history().await?))
}
