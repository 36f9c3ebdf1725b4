//! End-to-end tests over a real HTTP listener
//!
//! These tests verify the public site API:
//! 1. Static endpoints and the service catalog
//! 2. Lead capture against the SQLite store
//! 3. Write failures and malformed payloads
//! 4. The diagnostic probe, CORS and request-id headers

use async_trait::async_trait;
use flooring_pro_backend::api;
use flooring_pro_backend::config::Config;
use flooring_pro_backend::state::AppState;
use flooring_pro_backend::store::{DocumentStore, SqliteDocumentStore, StoreError};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinSet;

/// Store whose writes always fail
#[derive(Default)]
struct BrokenStore {
    writes: AtomicUsize,
}

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn create_document(&self, _collection: &str, _record: Value) -> Result<String, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Connection("replica set unreachable".to_string()))
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn name(&self) -> Option<&str> {
        Some("broken")
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Connection("replica set unreachable".to_string()))
    }
}

/// Serve the router on an ephemeral port and return its base URL
async fn spawn_app(config: Config, store: Option<Arc<dyn DocumentStore>>) -> String {
    let state = Arc::new(AppState::new(config, store));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn sqlite_store(dir: &TempDir) -> Arc<SqliteDocumentStore> {
    let path = dir.path().join("flooring.db");
    let store = SqliteDocumentStore::connect(path.to_str().unwrap(), Some("flooring"))
        .await
        .unwrap();
    Arc::new(store)
}

#[tokio::test]
async fn test_static_endpoints() {
    let base = spawn_app(Config::default(), None).await;
    let client = reqwest::Client::new();

    let root: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        root,
        json!({
            "name": "Flooring Pro API",
            "message": "Backend running",
            "endpoints": ["/api/hello", "/api/services", "/api/lead", "/test"]
        })
    );

    let hello: Value = client
        .get(format!("{}/api/hello", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hello, json!({"message": "Hello from the backend API!"}));
}

#[tokio::test]
async fn test_services_are_byte_identical_across_calls() {
    let base = spawn_app(Config::default(), None).await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/services", base);

    let first = client.get(&url).send().await.unwrap().bytes().await.unwrap();
    let second = client.get(&url).send().await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);

    let services: Vec<Value> = serde_json::from_slice(&first).unwrap();
    let ids: Vec<&str> = services.iter().filter_map(|s| s["id"].as_str()).collect();
    assert_eq!(ids, ["carpet", "wood", "laminate", "tile"]);
}

#[tokio::test]
async fn test_lead_is_persisted_and_listed() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir).await;
    let base = spawn_app(Config::default(), Some(store.clone())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/lead", base))
        .json(&json!({
            "name": "Jana Nováková",
            "email": "jana@example.cz",
            "phone": "+420 777 123 456",
            "service": "wood",
            "message": "Renovace parket v obýváku"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let stored = store.get_document(id).await.unwrap().unwrap();
    assert_eq!(stored["name"], "Jana Nováková");
    assert_eq!(stored["service"], "wood");

    let report: Value = client
        .get(format!("{}/test", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["database"], "✅ Connected & Working");
    assert_eq!(report["connection_status"], "Connected");
    assert_eq!(report["database_label"], "flooring");
    assert_eq!(report["collections"], json!(["lead"]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_leads_each_get_their_own_write() {
    const SUBMISSIONS: usize = 20;

    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir).await;
    let base = spawn_app(Config::default(), Some(store.clone())).await;
    let client = reqwest::Client::new();

    let mut tasks = JoinSet::new();
    for _ in 0..SUBMISSIONS {
        let client = client.clone();
        let url = format!("{}/api/lead", base);
        // Identical payloads: nothing is deduplicated
        tasks.spawn(async move {
            let response = client
                .post(url)
                .json(&json!({"name": "Jana", "email": "jana@example.cz"}))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = response.json().await.unwrap();
            body["id"].as_str().unwrap().to_string()
        });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        ids.insert(id.unwrap());
    }
    assert_eq!(ids.len(), SUBMISSIONS);

    for id in &ids {
        let stored = store.get_document(id).await.unwrap();
        assert!(stored.is_some(), "document {} was not stored", id);
    }
    assert_eq!(store.list_collection_names().await.unwrap(), vec!["lead"]);
}

#[tokio::test]
async fn test_malformed_lead_is_rejected_before_write() {
    let broken = Arc::new(BrokenStore::default());
    let base = spawn_app(Config::default(), Some(broken.clone())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/lead", base))
        .json(&json!({"name": "Petr"}))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(broken.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_write_failure_returns_500_with_detail() {
    let broken = Arc::new(BrokenStore::default());
    let base = spawn_app(Config::default(), Some(broken.clone())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/lead", base))
        .json(&json!({"name": "Petr", "email": "petr@example.cz"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("replica set unreachable"));
    assert!(body.get("id").is_none());
    assert_eq!(broken.writes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_diagnostics_never_fail() {
    let broken: Arc<dyn DocumentStore> = Arc::new(BrokenStore::default());
    for store in [None, Some(broken)] {
        let base = spawn_app(Config::default(), store).await;
        let response = reqwest::get(format!("{}/test", base)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let report: Value = response.json().await.unwrap();
        assert_eq!(report["backend"], "✅ Running");
        assert_eq!(report["collections"], json!([]));
        let database = report["database"].as_str().unwrap();
        assert!(
            database.starts_with("❌") || database.contains("Error"),
            "unexpected database status: {}",
            database
        );
    }
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let base = spawn_app(Config::default(), None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/services", base))
        .header("Origin", "https://flooring.example")
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://flooring.example"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_each_response_carries_its_own_request_id() {
    let base = spawn_app(Config::default(), None).await;
    let client = reqwest::Client::new();

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let response = client
            .get(format!("{}/api/hello", base))
            .send()
            .await
            .unwrap();
        let id = response.headers()["x-request-id"].to_str().unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&id).is_ok(), "not a uuid: {}", id);
        seen.insert(id);
    }
    assert_eq!(seen.len(), 3);
}
