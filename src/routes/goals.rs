// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user goal management routes.

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::UserGoals;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/goals", get(get_goals).put(update_goals))
}

#[derive(Serialize)]
pub struct GoalsResponse {
    pub goals: UserGoals,
}

/// Get the current user's goals.
async fn get_goals(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<GoalsResponse>> {
    let user = state
        .store
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    Ok(Json(GoalsResponse { goals: user.goals }))
}

/// Partial goal update: absent fields keep their current value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalsRequest {
    pub daily_target: Option<f64>,
    pub monthly_target: Option<f64>,
}

/// Update goals (partial allowed).
async fn update_goals(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<UpdateGoalsRequest>,
) -> Result<Json<GoalsResponse>> {
    if req.daily_target.is_some_and(|t| !t.is_finite() || t < 0.0) {
        return Err(AppError::BadRequest(
            "dailyTarget must be a positive number".to_string(),
        ));
    }
    if req.monthly_target.is_some_and(|t| !t.is_finite() || t < 0.0) {
        return Err(AppError::BadRequest(
            "monthlyTarget must be a positive number".to_string(),
        ));
    }

    let mut user = state
        .store
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    if let Some(daily) = req.daily_target {
        user.goals.daily_target = daily;
    }
    if let Some(monthly) = req.monthly_target {
        user.goals.monthly_target = monthly;
    }
    state.store.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, "Goals updated");

    Ok(Json(GoalsResponse { goals: user.goals }))
}
