// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement evaluation.
//!
//! Pure and idempotent: a name already present in the existing set is
//! never emitted again. The caller persists the merged set.

use crate::models::Achievement;
use chrono::{DateTime, Utc};

pub const FIRST_ACTIVITY: &str = "First Activity Logged";
pub const DAILY_GOAL: &str = "Daily Goal Achieved!";

/// Aggregates an evaluation runs against.
#[derive(Debug, Clone, Copy)]
pub struct AchievementContext {
    /// Total number of activities the user has ever logged
    pub total_activities: u64,
    /// Today's CO2 sum
    pub daily_total: f64,
    /// Daily goal, when one is configured
    pub daily_target: Option<f64>,
}

/// Determine newly-qualifying achievements.
pub fn evaluate(
    existing: &[Achievement],
    context: &AchievementContext,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let has = |name: &str| existing.iter().any(|a| a.name == name);
    let mut earned = Vec::new();

    if context.total_activities == 1 && !has(FIRST_ACTIVITY) {
        earned.push(Achievement {
            name: FIRST_ACTIVITY.to_string(),
            date_earned: now,
        });
    }

    if let Some(target) = context.daily_target {
        if context.daily_total > 0.0 && context.daily_total <= target && !has(DAILY_GOAL) {
            earned.push(Achievement {
                name: DAILY_GOAL.to_string(),
                date_earned: now,
            });
        }
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(total_activities: u64, daily_total: f64, daily_target: Option<f64>) -> AchievementContext {
        AchievementContext {
            total_activities,
            daily_total,
            daily_target,
        }
    }

    #[test]
    fn test_first_activity_awarded() {
        let earned = evaluate(&[], &ctx(1, 12.0, None), Utc::now());
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].name, FIRST_ACTIVITY);
    }

    #[test]
    fn test_first_activity_only_on_exactly_one() {
        assert!(evaluate(&[], &ctx(0, 0.0, None), Utc::now()).is_empty());
        assert!(evaluate(&[], &ctx(2, 12.0, None), Utc::now()).is_empty());
    }

    #[test]
    fn test_daily_goal_requires_nonzero_day() {
        let earned = evaluate(&[], &ctx(5, 0.0, Some(50.0)), Utc::now());
        assert!(earned.is_empty());

        let earned = evaluate(&[], &ctx(5, 20.0, Some(50.0)), Utc::now());
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].name, DAILY_GOAL);
    }

    #[test]
    fn test_daily_goal_not_awarded_over_target() {
        assert!(evaluate(&[], &ctx(5, 60.0, Some(50.0)), Utc::now()).is_empty());
    }

    #[test]
    fn test_never_reawards_existing_names() {
        let now = Utc::now();
        let existing = evaluate(&[], &ctx(1, 20.0, Some(50.0)), now);
        assert_eq!(existing.len(), 2);

        // Same context again: nothing new.
        assert!(evaluate(&existing, &ctx(1, 20.0, Some(50.0)), now).is_empty());
    }
}
