// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carbon-Tracker: personal carbon footprint tracking backend
//!
//! This crate provides the backend API for logging daily transport,
//! electricity and food activities, computing CO2 estimates from fixed
//! emission factors, and serving dashboards, leaderboards and goals.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use store::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
}
