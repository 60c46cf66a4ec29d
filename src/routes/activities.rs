// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity logging, listing and what-if simulation routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ActivityInput, ActivityRecord};
use crate::services::simulation::{simulate, SimulationResult};
use crate::services::{calculate_co2, generate_eco_tips};
use crate::time_utils::{start_of_day, start_of_month, start_of_trailing_week};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(log_activity).get(get_activities))
        .route("/api/activities/simulate", post(simulate_activity))
}

// ─── Log Activity ────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityResponse {
    pub activity: ActivityRecord,
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    pub tips: Vec<String>,
}

/// Log one day's activity: compute the CO2 total, persist the record,
/// and return tips for the submitted inputs.
async fn log_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<ActivityInput>,
) -> Result<(StatusCode, Json<LogActivityResponse>)> {
    input
        .validate()
        .map_err(|_| AppError::BadRequest(
            "All numeric values must be non-negative and within daily limits".to_string(),
        ))?;

    let total_co2 = calculate_co2(&input);
    let record = ActivityRecord::new(&user.user_id, &input, total_co2, chrono::Utc::now());
    state.store.save_activity(&record).await?;

    tracing::info!(
        user_id = %user.user_id,
        activity_id = %record.id,
        total_co2,
        "Activity logged"
    );

    let tips = generate_eco_tips(&input, total_co2);

    Ok((
        StatusCode::CREATED,
        Json(LogActivityResponse {
            activity: record,
            total_co2,
            tips,
        }),
    ))
}

// ─── List Activities ─────────────────────────────────────────

/// History slice requested by the client.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
    All,
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    #[serde(default)]
    period: Period,
}

/// Get the user's activities for a period, newest first.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<ActivityRecord>>> {
    let now = chrono::Utc::now();
    let since = match params.period {
        Period::Day => Some(start_of_day(now)),
        Period::Week => Some(start_of_trailing_week(now)),
        Period::Month => Some(start_of_month(now)),
        Period::All => None,
    };

    let records = state.store.activities_for_user(&user.user_id, since).await?;
    Ok(Json(records))
}

// ─── Simulation ──────────────────────────────────────────────

#[derive(Deserialize)]
struct SimulateRequest {
    current: Option<ActivityInput>,
    proposed: Option<ActivityInput>,
}

/// Compare a current day against a hypothetical alternative.
async fn simulate_activity(
    Extension(_user): Extension<AuthUser>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulationResult>> {
    let (Some(current), Some(proposed)) = (req.current, req.proposed) else {
        return Err(AppError::BadRequest(
            "Provide current and proposed activity objects".to_string(),
        ));
    };

    Ok(Json(simulate(&current, &proposed)))
}
