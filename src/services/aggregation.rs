// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-windowed aggregation over a user's activity history.
//!
//! Pure computation over an already-fetched history slice: day/week/month
//! totals, the trailing chart window, and the low-emission streak.

use crate::models::ActivityRecord;
use crate::services::calculator::round2;
use crate::time_utils::{start_of_day, start_of_month, start_of_trailing_week};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Number of most-recent records kept for the chart and streak input.
pub const RECENT_WINDOW_LEN: usize = 14;

/// One point of the dashboard chart series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub co2: f64,
}

/// Aggregated view of a user's history at a reference instant.
#[derive(Debug, Clone)]
pub struct Aggregates {
    /// Sum over [UTC midnight of `now`, now]
    pub daily: f64,
    /// Sum over the trailing 7 full days
    pub weekly: f64,
    /// Weekly sum divided by 7, regardless of how many days have data
    pub weekly_average: f64,
    /// Sum over [first of the calendar month, now]
    pub monthly: f64,
    /// Unbounded sum over the full history
    pub all_time: f64,
    /// Most recent records, newest first (chart source and streak input)
    pub recent_window: Vec<ActivityRecord>,
    /// `recent_window` reversed to oldest-first, ready for plotting
    pub chart_series: Vec<ChartPoint>,
}

fn window_sum(history: &[ActivityRecord], start: DateTime<Utc>) -> f64 {
    history
        .iter()
        .filter(|r| r.date >= start)
        .map(|r| r.total_co2)
        .sum()
}

/// Aggregate a user's history relative to `now`.
///
/// The history need not be pre-sorted; all windows use an inclusive
/// lower bound.
pub fn aggregate(history: &[ActivityRecord], now: DateTime<Utc>) -> Aggregates {
    let weekly_raw = window_sum(history, start_of_trailing_week(now));

    let mut recent: Vec<ActivityRecord> = history.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_WINDOW_LEN);

    let chart_series = recent
        .iter()
        .rev()
        .map(|r| ChartPoint {
            date: r.date,
            co2: r.total_co2,
        })
        .collect();

    Aggregates {
        daily: round2(window_sum(history, start_of_day(now))),
        weekly: round2(weekly_raw),
        weekly_average: round2(weekly_raw / 7.0),
        monthly: round2(window_sum(history, start_of_month(now))),
        all_time: round2(history.iter().map(|r| r.total_co2).sum()),
        recent_window: recent,
        chart_series,
    }
}

/// Trailing consecutive-day streak of qualifying low-emission days.
///
/// Collapses the recent window into per-calendar-day sums, then walks
/// backward from today's date. A day stops the count when it has no data,
/// exceeds the daily target (when one is configured), or emitted strictly
/// more than the previously counted (more recent) day. Equal values keep
/// the streak alive.
pub fn streak(recent_window: &[ActivityRecord], daily_target: Option<f64>, now: DateTime<Utc>) -> u32 {
    let mut day_totals: HashMap<NaiveDate, f64> = HashMap::new();
    for record in recent_window {
        *day_totals.entry(record.date.date_naive()).or_insert(0.0) += record.total_co2;
    }

    let today = now.date_naive();
    let mut count = 0;
    let mut prev_day: Option<f64> = None;

    for offset in 0..RECENT_WINDOW_LEN as u64 {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        let Some(&total) = day_totals.get(&day) else {
            break;
        };
        if daily_target.is_some_and(|target| total > target) {
            break;
        }
        if prev_day.is_some_and(|prev| total > prev) {
            break;
        }
        count += 1;
        prev_day = Some(total);
    }

    count
}
