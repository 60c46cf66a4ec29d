// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - domain logic layer.
//!
//! Everything here is pure computation over already-fetched data; the
//! store and the HTTP layer live elsewhere.

pub mod achievements;
pub mod aggregation;
pub mod calculator;
pub mod export;
pub mod leaderboard;
pub mod password;
pub mod simulation;
pub mod tips;

pub use aggregation::{aggregate, streak, Aggregates, RECENT_WINDOW_LEN};
pub use calculator::{calculate_co2, category_breakdown, round2, Breakdown};
pub use leaderboard::{rank, RankedEntry, UserWindowSum, LEADERBOARD_LIMIT};
pub use simulation::{simulate, SimulationResult};
pub use tips::generate_eco_tips;
