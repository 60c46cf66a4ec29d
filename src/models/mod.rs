// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod factors;
pub mod user;

pub use activity::{ActivityInput, ActivityRecord, Electricity, Food, Transport};
pub use user::{Achievement, User, UserGoals};
