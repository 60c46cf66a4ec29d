// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based eco tip generation.
//!
//! Rules are independent and fire in a fixed order; when none fires a
//! single positive-reinforcement message is returned, so the list is
//! never empty.

use crate::models::ActivityInput;

const CAR_KM_THRESHOLD: f64 = 20.0;
const KWH_THRESHOLD: f64 = 15.0;
const MEAT_SERVINGS_THRESHOLD: f64 = 2.0;
const HIGH_TOTAL_THRESHOLD: f64 = 30.0;

pub const TIP_TRANSPORT: &str =
    "Consider using public transport or biking for shorter trips to reduce emissions.";
pub const TIP_ELECTRICITY: &str =
    "Switch to LED bulbs and unplug electronics when not in use to save energy.";
pub const TIP_FOOD: &str =
    "Try having one meat-free day per week to reduce your food carbon footprint.";
pub const TIP_HIGH_TOTAL: &str =
    "Your daily emissions are high. Try combining errands into one trip.";
pub const TIP_POSITIVE: &str = "Great job! You're keeping your carbon footprint low today.";

/// Advisory strings for one day's inputs and its computed total.
pub fn generate_eco_tips(input: &ActivityInput, total_co2: f64) -> Vec<String> {
    let mut tips = Vec::new();

    if input
        .transport
        .as_ref()
        .is_some_and(|t| t.car_km > CAR_KM_THRESHOLD)
    {
        tips.push(TIP_TRANSPORT.to_string());
    }

    if input
        .electricity
        .as_ref()
        .is_some_and(|e| e.kwh_used > KWH_THRESHOLD)
    {
        tips.push(TIP_ELECTRICITY.to_string());
    }

    if input
        .food
        .as_ref()
        .is_some_and(|f| f.meat > MEAT_SERVINGS_THRESHOLD)
    {
        tips.push(TIP_FOOD.to_string());
    }

    if total_co2 > HIGH_TOTAL_THRESHOLD {
        tips.push(TIP_HIGH_TOTAL.to_string());
    }

    if tips.is_empty() {
        tips.push(TIP_POSITIVE.to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Electricity, Food, Transport};

    #[test]
    fn test_car_threshold_fires_transport_tip() {
        let input = ActivityInput {
            transport: Some(Transport {
                car_km: 25.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let tips = generate_eco_tips(&input, 5.25);
        assert!(tips.contains(&TIP_TRANSPORT.to_string()));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let input = ActivityInput {
            transport: Some(Transport {
                car_km: 20.0,
                ..Default::default()
            }),
            electricity: Some(Electricity { kwh_used: 15.0 }),
            food: Some(Food {
                meat: 2.0,
                ..Default::default()
            }),
        };
        // All fields sit exactly at their thresholds, so nothing fires.
        let tips = generate_eco_tips(&input, 30.0);
        assert_eq!(tips, vec![TIP_POSITIVE.to_string()]);
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let input = ActivityInput {
            transport: Some(Transport {
                car_km: 100.0,
                ..Default::default()
            }),
            electricity: Some(Electricity { kwh_used: 40.0 }),
            food: Some(Food {
                meat: 4.0,
                ..Default::default()
            }),
        };
        let tips = generate_eco_tips(&input, 70.0);
        assert_eq!(
            tips,
            vec![
                TIP_TRANSPORT.to_string(),
                TIP_ELECTRICITY.to_string(),
                TIP_FOOD.to_string(),
                TIP_HIGH_TOTAL.to_string(),
            ]
        );
    }

    #[test]
    fn test_never_empty() {
        let tips = generate_eco_tips(&ActivityInput::default(), 0.0);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0], TIP_POSITIVE);
    }
}
