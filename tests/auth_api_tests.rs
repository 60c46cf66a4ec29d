// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication and CORS tests.
//!
//! These tests verify that:
//! 1. Register/login issue working session tokens
//! 2. Protected routes reject requests without valid tokens
//! 3. CORS preflight requests return correct headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let (app, _) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "name": "Alice", "email": "alice@example.com", "password": "secret-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (app, _) = common::create_test_app();
    common::register_user(&app, "Alice", "alice@example.com").await;

    let response = common::send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "name": "Alice Again", "email": "alice@example.com", "password": "secret-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["details"], "User already exists");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (app, _) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "name": "Alice", "email": "alice@example.com", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_round_trip() {
    let (app, _) = common::create_test_app();
    common::register_user(&app, "Alice", "alice@example.com").await;

    let response = common::send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "email": "alice@example.com", "password": "secret-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let token = body["token"].as_str().unwrap();

    // The fresh token works against a protected route.
    let me = common::send_get(&app, "/api/me", Some(token)).await;
    assert_eq!(me.status(), StatusCode::OK);
    let me_body = common::body_json(me).await;
    assert_eq!(me_body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let (app, _) = common::create_test_app();
    common::register_user(&app, "Alice", "alice@example.com").await;

    let response = common::send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "email": "alice@example.com", "password": "not-the-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["details"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app();

    let response = common::send_get(&app, "/api/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = common::create_test_app();

    let response = common::send_get(&app, "/api/dashboard", Some("invalid.token.here")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/dashboard")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // OPTIONS should return 200 (CORS preflight success)
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_public_route_no_auth_required() {
    let (app, _) = common::create_test_app();

    let response = common::send_get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
