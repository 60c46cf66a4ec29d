// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! What-if comparator for hypothetical activity changes.

use crate::models::ActivityInput;
use crate::services::calculator::{calculate_co2, category_breakdown, round2, Breakdown};
use serde::Serialize;

/// One side of a comparison: total plus its category breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedSide {
    pub total: f64,
    pub breakdown: Breakdown,
}

/// Side-by-side comparison of a current and a proposed day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub current: SimulatedSide,
    pub proposed: SimulatedSide,
    /// Positive = the proposal is an improvement.
    pub savings: f64,
    /// Percentage of the current total saved; 0 when the baseline is 0.
    pub savings_percent: f64,
    pub message: String,
}

/// Compare a current day against a proposed alternative.
pub fn simulate(current: &ActivityInput, proposed: &ActivityInput) -> SimulationResult {
    let current_co2 = calculate_co2(current);
    let proposed_co2 = calculate_co2(proposed);

    let savings = round2(current_co2 - proposed_co2);
    let savings_percent = if current_co2 > 0.0 {
        round2(savings / current_co2 * 100.0)
    } else {
        0.0
    };

    let message = if savings > 0.0 {
        format!(
            "You could reduce emissions by {} kg ({}%).",
            savings, savings_percent
        )
    } else {
        "No reduction achieved.".to_string()
    };

    SimulationResult {
        current: SimulatedSide {
            total: current_co2,
            breakdown: category_breakdown(current),
        },
        proposed: SimulatedSide {
            total: proposed_co2,
            breakdown: category_breakdown(proposed),
        },
        savings,
        savings_percent,
        message,
    }
}
