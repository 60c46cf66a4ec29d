// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV export of a user's activity history.

use crate::models::ActivityRecord;
use crate::time_utils::format_utc_rfc3339;

/// Fixed column order of the export.
pub const CSV_HEADER: &str =
    "date,totalCO2,carKm,busKm,bikeKm,walkKm,kwhUsed,meat,dairy,vegetables,processed";

/// Render the full history as CSV, one row per record, ascending by date.
pub fn activities_csv(records: &[ActivityRecord]) -> String {
    let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut lines = Vec::with_capacity(sorted.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for r in sorted {
        lines.push(format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            format_utc_rfc3339(r.date),
            r.total_co2,
            r.transport.car_km,
            r.transport.bus_km,
            r.transport.bike_km,
            r.transport.walk_km,
            r.electricity.kwh_used,
            r.food.meat,
            r.food.dairy,
            r.food.vegetables,
            r.food.processed,
        ));
    }
    lines.join("\n")
}
