// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CO2 calculation from raw activity inputs.
//!
//! Pure functions over the fixed emission factor table. Missing category
//! objects contribute zero; bike and walk distances are tracked but never
//! penalized.

use crate::models::factors::{
    BUS_KG_PER_KM, CAR_KG_PER_KM, DAIRY_KG_PER_SERVING, ELECTRICITY_KG_PER_KWH,
    MEAT_KG_PER_SERVING, PROCESSED_KG_PER_SERVING, VEGETABLES_KG_PER_SERVING,
};
use crate::models::ActivityInput;
use serde::Serialize;

/// Round to 2 decimal places (half-up on the cent-equivalent).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn transport_co2(input: &ActivityInput) -> f64 {
    input.transport.as_ref().map_or(0.0, |t| {
        t.car_km * CAR_KG_PER_KM + t.bus_km * BUS_KG_PER_KM
    })
}

fn electricity_co2(input: &ActivityInput) -> f64 {
    input
        .electricity
        .as_ref()
        .map_or(0.0, |e| e.kwh_used * ELECTRICITY_KG_PER_KWH)
}

fn food_co2(input: &ActivityInput) -> f64 {
    input.food.as_ref().map_or(0.0, |f| {
        f.meat * MEAT_KG_PER_SERVING
            + f.dairy * DAIRY_KG_PER_SERVING
            + f.vegetables * VEGETABLES_KG_PER_SERVING
            + f.processed * PROCESSED_KG_PER_SERVING
    })
}

/// Total kg CO2 for one day's activity inputs, rounded to 2 decimals.
pub fn calculate_co2(input: &ActivityInput) -> f64 {
    round2(transport_co2(input) + electricity_co2(input) + food_co2(input))
}

/// Per-category sums of a breakdown (kg CO2 or percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub transport: f64,
    pub electricity: f64,
    pub food: f64,
}

/// Decomposition of a CO2 total into category sums and percentages.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Breakdown {
    pub raw: CategoryTotals,
    pub percent: CategoryTotals,
}

/// Decompose the total into transport/electricity/food shares.
///
/// A zero total substitutes denominator 1, so percentages read 0 rather
/// than NaN.
pub fn category_breakdown(input: &ActivityInput) -> Breakdown {
    let transport = transport_co2(input);
    let electricity = electricity_co2(input);
    let food = food_co2(input);

    let total = transport + electricity + food;
    let denominator = if total == 0.0 { 1.0 } else { total };

    Breakdown {
        raw: CategoryTotals {
            transport: round2(transport),
            electricity: round2(electricity),
            food: round2(food),
        },
        percent: CategoryTotals {
            transport: round2(transport / denominator * 100.0),
            electricity: round2(electricity / denominator * 100.0),
            food: round2(food / denominator * 100.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Electricity, Food, Transport};

    fn sample_input() -> ActivityInput {
        ActivityInput {
            transport: Some(Transport {
                car_km: 10.0,
                ..Default::default()
            }),
            electricity: Some(Electricity { kwh_used: 5.0 }),
            food: Some(Food {
                meat: 1.0,
                vegetables: 2.0,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(calculate_co2(&ActivityInput::default()), 0.0);
    }

    #[test]
    fn test_known_total() {
        // 10*0.21 + 5*0.5 + 1*6.61 + 2*0.43 = 12.07
        assert_eq!(calculate_co2(&sample_input()), 12.07);
    }

    #[test]
    fn test_bike_and_walk_are_free() {
        let input = ActivityInput {
            transport: Some(Transport {
                bike_km: 40.0,
                walk_km: 12.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(calculate_co2(&input), 0.0);
    }

    #[test]
    fn test_monotonic_in_each_field() {
        let base = sample_input();
        let base_total = calculate_co2(&base);

        let mut more_car = base.clone();
        more_car.transport.as_mut().unwrap().car_km += 5.0;
        assert!(calculate_co2(&more_car) >= base_total);

        let mut more_kwh = base.clone();
        more_kwh.electricity.as_mut().unwrap().kwh_used += 3.0;
        assert!(calculate_co2(&more_kwh) >= base_total);

        let mut more_meat = base.clone();
        more_meat.food.as_mut().unwrap().meat += 1.0;
        assert!(calculate_co2(&more_meat) >= base_total);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let input = sample_input();
        let breakdown = category_breakdown(&input);
        let sum = breakdown.raw.transport + breakdown.raw.electricity + breakdown.raw.food;
        assert!((sum - calculate_co2(&input)).abs() <= 0.02);
    }

    #[test]
    fn test_breakdown_percentages() {
        let breakdown = category_breakdown(&sample_input());
        // transport 2.1 of 12.07 = 17.40%
        assert_eq!(breakdown.percent.transport, 17.4);
        let pct_sum =
            breakdown.percent.transport + breakdown.percent.electricity + breakdown.percent.food;
        assert!((pct_sum - 100.0).abs() <= 0.02);
    }

    #[test]
    fn test_zero_total_breakdown_has_zero_percentages() {
        let breakdown = category_breakdown(&ActivityInput::default());
        assert_eq!(breakdown.percent, CategoryTotals::default());
        assert_eq!(breakdown.raw, CategoryTotals::default());
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(round2(12.074), 12.07);
        assert_eq!(round2(12.076), 12.08);
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(0.0), 0.0);
    }
}
