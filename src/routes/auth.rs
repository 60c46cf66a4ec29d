// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Email/password authentication routes.

use axum::{extract::State, http::StatusCode, routing::post, Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser, SESSION_COOKIE};
use crate::models::{User, UserGoals};
use crate::services::password::{hash_password, verify_password};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Routes that additionally require authentication.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", axum::routing::get(get_me))
}

// ─── Register ────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Public view of a user, embedded in auth responses.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(7))
        .build()
}

/// Create a new account and start a session.
async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, (StatusCode, Json<AuthResponse>))> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if state.store.get_user_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: req.name.trim().to_string(),
        email: req.email.trim().to_lowercase(),
        password_hash: hash_password(&req.password)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?,
        created_at: chrono::Utc::now(),
        goals: UserGoals::default(),
        achievements: vec![],
    };
    state.store.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)?;
    let jar = jar.add(session_cookie(token.clone()));

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(AuthResponse {
                token,
                user: PublicUser {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                },
            }),
        ),
    ))
}

// ─── Login / Logout ──────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Log in with email and password.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state
        .store
        .get_user_by_email(&req.email.trim().to_lowercase())
        .await?;

    // Same rejection for unknown email and wrong password.
    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        _ => return Err(AppError::BadRequest("Invalid credentials".to_string())),
    };

    tracing::info!(user_id = %user.id, "User logged in");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)?;
    let jar = jar.add(session_cookie(token.clone()));

    Ok((
        jar,
        Json(AuthResponse {
            token,
            user: PublicUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// End the session by clearing the cookie.
async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Json(LogoutResponse { success: true }))
}

// ─── Current User ────────────────────────────────────────────

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PublicUser>> {
    let profile = state
        .store
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(PublicUser {
        id: profile.id,
        name: profile.name,
        email: profile.email,
    }))
}
