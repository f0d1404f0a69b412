//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use slotcache::api::create_router;
use slotcache::store::MemoryStore;
use slotcache::{AppState, CacheConfig, CacheEngine};

// == Helper Functions ==

fn create_app(idle_ttl_secs: u64, max_entries: usize) -> Router {
    let store = Arc::new(MemoryStore::new());
    let engine = CacheEngine::new(
        store,
        CacheConfig {
            idle_ttl_secs,
            max_entries,
        },
    );
    create_router(AppState::new(engine))
}

fn create_test_app() -> Router {
    create_app(300, 100)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Lookup Endpoint Tests ==

#[tokio::test]
async fn test_lookup_miss_then_hit() {
    let app = create_test_app();

    let (status, miss) = get(&app, "/cache/mykey").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(miss["hit"], Value::Bool(false));
    assert_eq!(miss["message"], "Cache miss");
    assert!(miss["value"].is_string());

    let (status, hit) = get(&app, "/cache/mykey").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hit["hit"], Value::Bool(true));
    assert_eq!(hit["message"], "Cache hit");
    assert_eq!(hit["value"], miss["value"]);
}

#[tokio::test]
async fn test_lookup_at_capacity_returns_service_unavailable() {
    let app = create_app(300, 1);

    let (status, _) = get(&app, "/cache/a").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/cache/b").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_endpoint_success() {
    let app = create_test_app();

    let (status, json) =
        send_json(&app, "POST", "/cache", r#"{"data":{"user":"x","count":3}}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("successfully"));
    let record = &json["record"];
    assert!(!record["key"].as_str().unwrap().is_empty());
    assert_eq!(record["value"]["user"], "x");
    assert!(record["expires_at"].is_u64());
}

#[tokio::test]
async fn test_create_endpoint_missing_data() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "POST", "/cache", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_endpoint_inserts_then_replaces() {
    let app = create_test_app();

    let (status, first) = send_json(&app, "PATCH", "/cache/user42", r#"{"data":"v1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["record"]["key"], "user42");

    let (status, second) = send_json(&app, "PATCH", "/cache/user42", r#"{"data":"v2"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["record"]["value"], "v2");

    let (_, read) = get(&app, "/cache/user42").await;
    assert_eq!(read["hit"], Value::Bool(true));
    assert_eq!(read["value"], "v2");
}

#[tokio::test]
async fn test_update_endpoint_null_data() {
    let app = create_test_app();

    let (status, _) = send_json(&app, "PATCH", "/cache/k", r#"{"data":null}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Keys Endpoint Tests ==

#[tokio::test]
async fn test_keys_endpoint_lists_live_keys() {
    let app = create_test_app();

    send_json(&app, "PATCH", "/cache/k1", r#"{"data":1}"#).await;
    send_json(&app, "PATCH", "/cache/k2", r#"{"data":2}"#).await;

    let (status, json) = get(&app, "/keys").await;
    assert_eq!(status, StatusCode::OK);

    let keys: Vec<&str> = json["keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"k1"));
    assert!(keys.contains(&"k2"));
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app();

    send_json(&app, "PATCH", "/cache/doomed", r#"{"data":"v"}"#).await;

    let (status, json) = send_json(&app, "DELETE", "/cache/doomed", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "doomed");

    let (status, _) = send_json(&app, "DELETE", "/cache/doomed", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_key() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "DELETE", "/cache/nonexistent", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_flush_endpoint() {
    let app = create_test_app();

    send_json(&app, "PATCH", "/cache/k1", r#"{"data":1}"#).await;
    send_json(&app, "PATCH", "/cache/k2", r#"{"data":2}"#).await;

    let (status, _) = send_json(&app, "DELETE", "/cache", "").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/keys").await;
    assert!(json["keys"].as_array().unwrap().is_empty());

    // Flushing an empty cache still succeeds
    let (status, _) = send_json(&app, "DELETE", "/cache", "").await;
    assert_eq!(status, StatusCode::OK);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Full Scenario ==
// The documented walk with a 1-second idle window and two slots.

#[tokio::test]
async fn test_capacity_and_takeover_scenario() {
    let app = create_app(1, 2);

    // Fresh store: "a" misses and is admitted
    let (_, first) = get(&app, "/cache/a").await;
    assert_eq!(first["hit"], Value::Bool(false));

    // Immediate re-read hits with the same value
    let (_, again) = get(&app, "/cache/a").await;
    assert_eq!(again["hit"], Value::Bool(true));
    assert_eq!(again["value"], first["value"]);

    // "b" fills the second slot
    let (_, second) = get(&app, "/cache/b").await;
    assert_eq!(second["hit"], Value::Bool(false));

    // At capacity with both entries live: "c" cannot be admitted
    let (status, _) = get(&app, "/cache/c").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // After the idle window passes, "c" is admitted by takeover
    sleep(Duration::from_millis(1100));
    let (status, admitted) = get(&app, "/cache/c").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(admitted["hit"], Value::Bool(false));

    // The slot count never grew: exactly one key is live, and it is the
    // takeover victim's key, not "c"
    let (_, keys) = get(&app, "/keys").await;
    let keys = keys["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 1);
    let survivor = keys[0].as_str().unwrap();
    assert!(survivor == "a" || survivor == "b");
}
