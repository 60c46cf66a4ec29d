// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard read-model and CSV export routes.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::factors::{EmissionFactorsMeta, FACTORS_META};
use crate::models::{Achievement, ActivityRecord, UserGoals};
use crate::services::achievements::{evaluate, AchievementContext};
use crate::services::aggregation::ChartPoint;
use crate::services::export::activities_csv;
use crate::services::{aggregate, category_breakdown, generate_eco_tips, streak, Breakdown};
use crate::AppState;

/// Tip shown before the first activity is logged.
const GETTING_STARTED_TIP: &str = "Start logging your activities to get personalized eco tips!";

/// Number of recent records embedded in the dashboard response.
const RECENT_ACTIVITIES_LIMIT: usize = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/export", get(export_csv))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub daily: f64,
    pub weekly: f64,
    pub weekly_average: f64,
    pub monthly: f64,
    pub all_time: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub total_carbon_footprint: f64,
    pub goals: UserGoals,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub totals: DashboardTotals,
    pub user: DashboardUser,
    pub achievements: Vec<Achievement>,
    pub recent_activities: Vec<ActivityRecord>,
    pub tips: Vec<String>,
    pub chart_data: Vec<ChartPoint>,
    pub breakdown: Breakdown,
    pub streak: u32,
    pub emission_factors: EmissionFactorsMeta,
}

/// Assemble the dashboard read model.
///
/// Also evaluates achievements against the fresh aggregates and persists
/// any newly earned ones before responding.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<DashboardResponse>> {
    let mut user = state
        .store
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;

    let history = state.store.activities_for_user(&auth.user_id, None).await?;
    let now = chrono::Utc::now();
    let aggregates = aggregate(&history, now);

    let daily_target = user.goals.configured_daily_target();
    let current_streak = streak(&aggregates.recent_window, daily_target, now);

    // Evaluate and persist newly earned achievements.
    let context = AchievementContext {
        total_activities: history.len() as u64,
        daily_total: aggregates.daily,
        daily_target,
    };
    let newly_earned = evaluate(&user.achievements, &context, now);
    if !newly_earned.is_empty() {
        tracing::info!(
            user_id = %user.id,
            count = newly_earned.len(),
            "Achievements earned"
        );
        user.achievements.extend(newly_earned);
        state.store.upsert_user(&user).await?;
    }

    // Tips and breakdown reflect the most recently logged day.
    let (tips, breakdown) = match aggregates.recent_window.first() {
        Some(latest) => {
            let input = latest.as_input();
            (
                generate_eco_tips(&input, latest.total_co2),
                category_breakdown(&input),
            )
        }
        None => (vec![GETTING_STARTED_TIP.to_string()], Breakdown::default()),
    };

    let recent_activities: Vec<ActivityRecord> = aggregates
        .recent_window
        .iter()
        .take(RECENT_ACTIVITIES_LIMIT)
        .cloned()
        .collect();

    Ok(Json(DashboardResponse {
        totals: DashboardTotals {
            daily: aggregates.daily,
            weekly: aggregates.weekly,
            weekly_average: aggregates.weekly_average,
            monthly: aggregates.monthly,
            all_time: aggregates.all_time,
        },
        user: DashboardUser {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            total_carbon_footprint: aggregates.all_time,
            goals: user.goals.clone(),
        },
        achievements: user.achievements,
        recent_activities,
        tips,
        chart_data: aggregates.chart_series,
        breakdown,
        streak: current_streak,
        emission_factors: FACTORS_META,
    }))
}

/// Export the full activity history as CSV.
async fn export_csv(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let history = state.store.activities_for_user(&auth.user_id, None).await?;
    let csv = activities_csv(&history);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"activities.csv\"",
            ),
        ],
        csv,
    ))
}
