// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Transport distances for one logged day (km).
///
/// Bike and walk distances are recorded for behavioral tracking but
/// contribute zero emissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub car_km: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub bike_km: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub bus_km: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub walk_km: f64,
}

/// Electricity usage for one logged day (kWh).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Electricity {
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub kwh_used: f64,
}

/// Food consumption for one logged day (servings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub meat: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub dairy: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub vegetables: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub processed: f64,
}

/// Raw activity inputs as submitted by the client.
///
/// Missing category objects are treated as zero usage by the calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ActivityInput {
    #[serde(default)]
    #[validate(nested)]
    pub transport: Option<Transport>,
    #[serde(default)]
    #[validate(nested)]
    pub electricity: Option<Electricity>,
    #[serde(default)]
    #[validate(nested)]
    pub food: Option<Food>,
}

/// Stored activity record: one day's inputs plus the derived CO2 total.
///
/// `total_co2` is computed by the calculator at creation time and never
/// mutated afterward. Records are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Record ID (UUID v4, also used as document ID)
    pub id: String,
    /// Owning user's ID
    pub user_id: String,
    /// When the activity was logged
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub electricity: Electricity,
    #[serde(default)]
    pub food: Food,
    /// Derived total (kg CO2, 2 decimals)
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
}

impl ActivityRecord {
    /// Create a record from validated inputs and a pre-computed total.
    pub fn new(user_id: &str, input: &ActivityInput, total_co2: f64, date: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date,
            transport: input.transport.clone().unwrap_or_default(),
            electricity: input.electricity.clone().unwrap_or_default(),
            food: input.food.clone().unwrap_or_default(),
            total_co2,
        }
    }

    /// View the record's inputs in the shape the calculator consumes.
    pub fn as_input(&self) -> ActivityInput {
        ActivityInput {
            transport: Some(self.transport.clone()),
            electricity: Some(self.electricity.clone()),
            food: Some(self.food.clone()),
        }
    }
}
