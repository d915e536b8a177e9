use client_registry::http::router;
use client_registry::lifecycle::RegistrySystem;
use client_registry::service::ClientService;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Starts the router on an ephemeral port and returns its base URL.
async fn spawn_app() -> String {
    let system = RegistrySystem::new(32);
    let service = ClientService::with_store(system.store());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Keep the actors alive for as long as the server runs.
        let _system = system;
        axum::serve(listener, router(service)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_client_lifecycle_over_http() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/client"))
        .json(&json!({ "name": "John", "age": 25, "comment": "ok" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_u64().unwrap();

    let response = http.get(format!("{base}/client/{id}")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, json!({ "name": "John", "age": 25, "comment": "ok" }));

    let response = http
        .put(format!("{base}/client/{id}"))
        .json(&json!({ "name": "John", "age": 26, "comment": "older" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = http.get(format!("{base}/client")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let clients: Value = response.json().await.unwrap();
    assert_eq!(clients[0]["id"].as_u64(), Some(id));
    assert_eq!(clients[0]["age"], 26);

    let response = http.delete(format!("{base}/client/{id}")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = http.get(format!("{base}/history")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history: Value = response.json().await.unwrap();
    let statuses: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["ClientCreated", "ClientEdited", "ClientDeleted"]);
    assert_eq!(history[0]["clientId"].as_u64(), Some(id));
}

#[tokio::test]
async fn test_empty_collections_are_not_found() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/client")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(response).await, "No clients found");

    let response = reqwest::get(format!("{base}/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(response).await, "No history found");
}

#[tokio::test]
async fn test_missing_client_is_not_found() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http.get(format!("{base}/client/99")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(response).await, "No client found by this id: 99");

    let response = http
        .put(format!("{base}/client/99"))
        .json(&json!({ "name": "John", "age": 25, "comment": "ok" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = http.delete(format!("{base}/client/99")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        message(response).await,
        "No client found to delete with this id: 99"
    );
}

#[tokio::test]
async fn test_invalid_payloads_are_bad_requests() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/client"))
        .json(&json!({ "name": "", "age": 25, "comment": "ok" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(response).await, "Name is required.");

    // Missing fields fall through to validation.
    let response = http
        .post(format!("{base}/client"))
        .json(&json!({ "name": "John" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message(response).await,
        "Age is required., Age must be greater than 0., Comment is required."
    );

    let response = http
        .post(format!("{base}/client"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!message(response).await.is_empty());

    let response = http.get(format!("{base}/client/abc")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let response = http.get(format!("{base}/history")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_out_of_range_ids_are_not_found() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    for raw in ["-1", "4294967296"] {
        let response = http.get(format!("{base}/client/{raw}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {raw}");
        assert_eq!(
            message(response).await,
            format!("No client found by this id: {raw}")
        );

        let response = http
            .put(format!("{base}/client/{raw}"))
            .json(&json!({ "name": "John", "age": 25, "comment": "ok" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "PUT {raw}");
        assert_eq!(
            message(response).await,
            format!("No client found by this id: {raw}")
        );

        let response = http
            .delete(format!("{base}/client/{raw}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {raw}");
        assert_eq!(
            message(response).await,
            format!("No client found to delete with this id: {raw}")
        );
    }

    // Still nothing to report.
    let response = http.get(format!("{base}/history")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_null_fields_are_reported_by_validation() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/client"))
        .json(&json!({ "name": null, "age": null, "comment": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message(response).await,
        "Name is required., Age is required., Age must be greater than 0., Comment is required."
    );

    let response = http
        .post(format!("{base}/client"))
        .json(&json!({ "name": null, "age": 25, "comment": "ok" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(response).await, "Name is required.");
}
