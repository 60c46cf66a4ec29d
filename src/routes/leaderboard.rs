// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard route.

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::services::leaderboard::{rank, RankedEntry, UserWindowSum, LEADERBOARD_LIMIT};
use crate::time_utils::{start_of_month, start_of_trailing_week};
use crate::AppState;

/// Concurrent per-user history fetches.
const MAX_CONCURRENT_STORE_OPS: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}

/// Ranking window requested by the client.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    Week,
    #[default]
    Month,
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    #[serde(default)]
    period: LeaderboardPeriod,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<RankedEntry>,
    pub current_user: Option<RankedEntry>,
}

/// Rank all users by emissions over the requested window.
///
/// Users are summed in account-creation order, which the ranker's stable
/// sort turns into a deterministic tie-break.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    let now = chrono::Utc::now();
    let since = match params.period {
        LeaderboardPeriod::Week => start_of_trailing_week(now),
        LeaderboardPeriod::Month => start_of_month(now),
    };

    let users = state.store.list_users().await?;

    // Ordered buffering keeps the result order equal to the user order.
    let sums: Vec<UserWindowSum> = stream::iter(users)
        .map(|user| {
            let store = state.store.clone();
            async move {
                let records = store.activities_for_user(&user.id, Some(since)).await?;
                Ok::<_, AppError>(UserWindowSum {
                    id: user.id,
                    name: user.name,
                    total_co2: records.iter().map(|r| r.total_co2).sum(),
                    activities_count: records.len() as u32,
                })
            }
        })
        .buffered(MAX_CONCURRENT_STORE_OPS)
        .collect::<Vec<std::result::Result<UserWindowSum, AppError>>>()
        .await
        .into_iter()
        .collect::<std::result::Result<Vec<UserWindowSum>, AppError>>()?;

    let ranked = rank(sums);

    let current_user = ranked.iter().find(|e| e.id == auth.user_id).cloned();
    let leaderboard: Vec<RankedEntry> = ranked.into_iter().take(LEADERBOARD_LIMIT).collect();

    Ok(Json(LeaderboardResponse {
        leaderboard,
        current_user,
    }))
}
