// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fixed CO2 emission factors (kg CO2 per unit).
//!
//! The table is a process-wide constant. Changing a factor changes the
//! meaning of all future totals; stored records are never recomputed.

use serde::Serialize;

/// kg CO2 per km driven by car.
pub const CAR_KG_PER_KM: f64 = 0.21;
/// kg CO2 per km by bus.
pub const BUS_KG_PER_KM: f64 = 0.089;
/// kg CO2 per kWh of grid electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.5;
/// kg CO2 per serving of meat.
pub const MEAT_KG_PER_SERVING: f64 = 6.61;
/// kg CO2 per serving of dairy.
pub const DAIRY_KG_PER_SERVING: f64 = 3.15;
/// kg CO2 per serving of vegetables.
pub const VEGETABLES_KG_PER_SERVING: f64 = 0.43;
/// kg CO2 per serving of processed food.
pub const PROCESSED_KG_PER_SERVING: f64 = 2.3;

/// Versioning metadata for the factor table, exposed on the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactorsMeta {
    pub version: &'static str,
    pub sources: &'static [&'static str],
    pub last_updated: &'static str,
}

/// Current factor table metadata.
pub const FACTORS_META: EmissionFactorsMeta = EmissionFactorsMeta {
    version: "1.0.0",
    sources: &[
        "Average passenger vehicle: EPA",
        "Grid electricity average intensity",
        "Food emissions factors aggregated (meat/dairy/vegetables/processed)",
    ],
    last_updated: "2025-08-10",
};
