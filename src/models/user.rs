// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user emission targets (kg CO2).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    #[serde(default = "default_daily_target")]
    pub daily_target: f64,
    #[serde(default = "default_monthly_target")]
    pub monthly_target: f64,
}

fn default_daily_target() -> f64 {
    50.0
}

fn default_monthly_target() -> f64 {
    1500.0
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            daily_target: default_daily_target(),
            monthly_target: default_monthly_target(),
        }
    }
}

impl UserGoals {
    /// A daily target of zero means "no target configured".
    pub fn configured_daily_target(&self) -> Option<f64> {
        (self.daily_target > 0.0).then_some(self.daily_target)
    }
}

/// An earned achievement. The per-user set is append-only and never
/// contains duplicate names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub name: String,
    pub date_earned: DateTime<Utc>,
}

/// User profile stored under the users collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID (UUID v4, also used as document ID)
    pub id: String,
    pub name: String,
    /// Email address, unique across users
    pub email: String,
    /// PBKDF2 password hash, `salt$hash` base64
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub goals: UserGoals,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl User {
    /// True if the user already holds an achievement with this name.
    pub fn has_achievement(&self, name: &str) -> bool {
        self.achievements.iter().any(|a| a.name == name)
    }
}
