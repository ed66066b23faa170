//! Shared utilities for integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use href_diff::{HttpServer, ServiceConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router built from the default configuration.
#[allow(dead_code)]
pub fn default_router() -> Router {
    HttpServer::new(ServiceConfig::default()).router()
}

/// POST a raw body to `/unique_hrefs` and decode the JSON response.
#[allow(dead_code)]
pub async fn post_raw(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/unique_hrefs")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// POST a JSON value to `/unique_hrefs`.
#[allow(dead_code)]
pub async fn post_json(router: Router, body: &Value) -> (StatusCode, Value) {
    post_raw(router, serde_json::to_vec(body).unwrap()).await
}

/// An export with one entry per href.
#[allow(dead_code)]
pub fn export(hrefs: &[&str]) -> Value {
    Value::Array(
        hrefs
            .iter()
            .map(|h| serde_json::json!({"string_list_data": [{"href": h, "value": "x", "timestamp": 0}]}))
            .collect(),
    )
}
