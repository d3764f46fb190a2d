//! Nutrition calculation module
//!
//! The engine: biometrics, portion scaling, daily aggregation, and meal
//! planning. Pure computations over in-memory data; persistence and console
//! I/O live elsewhere.

pub mod aggregate;
pub mod biometrics;
pub mod planner;
pub mod portion;

use thiserror::Error;

/// Engine error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NutritionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no foods match the requested category")]
    EmptyCandidateSet,

    #[error("cannot size a portion: every candidate food has zero calories")]
    DivisionUndefined,
}

/// Result type for engine operations
pub type NutritionResult<T> = Result<T, NutritionError>;

pub use aggregate::{compare_to_goal, daily_totals, DailyTotals, GoalStatus};
pub use biometrics::{categorize, compute_bmi, suggested_calories, BmiCategory};
pub use planner::{
    generate_daily_plan, generate_meal, meal_calories, meal_nutrition, DailyPlan, MealFilter,
    DEFAULT_MEAL_ITEMS, MAX_PORTION_GRAMS, MIN_PORTION_GRAMS,
};
pub use portion::scale_per_100g;
