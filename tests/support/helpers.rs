// tests/support/helpers.rs
use std::sync::{Arc, Mutex};

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;

use quillpost::application::ports::upload::ImageUploader;
use quillpost::application::services::{ApplicationServices, Repositories};
use quillpost::presentation::http::routes::{RouterOptions, build_router_with_options};
use quillpost::presentation::http::state::HttpState;

use super::mocks::{DummyClock, DummySlug, InMemoryCategoryRepo, InMemoryPostRepo, Store};

/// Services over one in-memory store. The store is returned so tests can
/// seed rows and inspect links.
pub fn build_services(
    uploader: Option<Arc<dyn ImageUploader>>,
) -> (ApplicationServices, Arc<Mutex<Store>>) {
    let store = Store::shared();
    let posts = InMemoryPostRepo::new(Arc::clone(&store));
    let categories = InMemoryCategoryRepo::new(Arc::clone(&store));

    let repos = Repositories {
        post_write: Arc::new(posts.clone()),
        post_read: Arc::new(posts),
        category_write: Arc::new(categories.clone()),
        category_read: Arc::new(categories),
    };

    let services = ApplicationServices::new(
        repos,
        Arc::new(DummyClock),
        Arc::new(DummySlug),
        uploader,
    );
    (services, store)
}

pub fn make_test_router_with_uploader(
    uploader: Option<Arc<dyn ImageUploader>>,
) -> (axum::Router, Arc<Mutex<Store>>) {
    let (services, store) = build_services(uploader);
    let state = HttpState {
        services: Arc::new(services),
    };
    let options = RouterOptions {
        allowed_origins: vec!["http://localhost:3000".into()],
        rate_limit: None,
    };
    (build_router_with_options(state, options), store)
}

pub fn make_test_router() -> (axum::Router, Arc<Mutex<Store>>) {
    make_test_router_with_uploader(None)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Split a response into status and parsed JSON body, checking the content
/// type on the way.
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct} (body: {})",
        String::from_utf8_lossy(&bytes)
    );
    let json = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Assert an `{error, message}` body with the expected status and reason.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    msg_field.to_string()
}
