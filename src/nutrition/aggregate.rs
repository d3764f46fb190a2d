//! Daily aggregation
//!
//! Reduces the food log into per-day totals and compares them against the
//! user's calorie goal.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{LogEntry, Nutrition};

/// Summed nutrition for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub nutrition: Nutrition,
    pub entries: usize,
}

/// Where a day's calories landed relative to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoalStatus {
    BelowGoal,
    OnGoal,
    AboveGoal,
}

/// Sum all entries whose local calendar date equals `day`.
///
/// Plain addition per field; order of entries does not affect the totals.
pub fn daily_totals(entries: &[LogEntry], day: NaiveDate) -> DailyTotals {
    let mut nutrition = Nutrition::zero();
    let mut count = 0;
    for entry in entries {
        if entry.logged_at.date_naive() == day {
            nutrition = nutrition + entry.nutrition;
            count += 1;
        }
    }
    DailyTotals {
        date: day,
        nutrition,
        entries: count,
    }
}

/// Compare a day's calories against the goal.
///
/// OnGoal requires exact equality. Float sums rarely land exactly on the goal;
/// the strict comparison is kept on purpose rather than widened into a
/// tolerance band.
pub fn compare_to_goal(total_calories: f64, goal: f64) -> GoalStatus {
    if total_calories < goal {
        GoalStatus::BelowGoal
    } else if total_calories == goal {
        GoalStatus::OnGoal
    } else {
        GoalStatus::AboveGoal
    }
}
