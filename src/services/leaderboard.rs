// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard ranking over per-user window sums.

use crate::services::calculator::round2;
use serde::Serialize;

/// Number of entries shown on the board.
pub const LEADERBOARD_LIMIT: usize = 10;

/// One user's emissions sum over the requested window.
#[derive(Debug, Clone)]
pub struct UserWindowSum {
    pub id: String,
    pub name: String,
    pub total_co2: f64,
    pub activities_count: u32,
}

/// A ranked leaderboard entry. Rank 1 = lowest cumulative CO2.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub id: String,
    pub name: String,
    pub rank: u32,
    pub total_emissions: f64,
    pub activities_count: u32,
}

/// Rank users ascending by emissions.
///
/// The sort is stable: equal totals keep the order the sums arrived in,
/// and receive distinct consecutive ranks (no shared-rank policy).
pub fn rank(sums: Vec<UserWindowSum>) -> Vec<RankedEntry> {
    let mut sums = sums;
    sums.sort_by(|a, b| a.total_co2.total_cmp(&b.total_co2));

    sums.into_iter()
        .enumerate()
        .map(|(index, user)| RankedEntry {
            id: user.id,
            name: user.name,
            rank: index as u32 + 1,
            total_emissions: round2(user.total_co2),
            activities_count: user.activities_count,
        })
        .collect()
}
