// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use carbon_tracker::config::Config;
use carbon_tracker::routes::create_router;
use carbon_tracker::store::Store;
use carbon_tracker::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = Store::in_memory();

    let state = Arc::new(AppState { config, store });
    (create_router(state.clone()), state)
}

/// Send a JSON request with an optional bearer token.
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Send a body-less request with an optional bearer token.
#[allow(dead_code)]
pub async fn send_get(app: &axum::Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Parse a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as a string.
#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a user and return their session token.
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, name: &str, email: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/auth/register",
        None,
        json!({ "name": name, "email": email, "password": "secret-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

/// Log an activity for the given session and return the response body.
#[allow(dead_code)]
pub async fn log_activity(app: &axum::Router, token: &str, payload: Value) -> Value {
    let response = send_json(app, "POST", "/api/activities", Some(token), payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
