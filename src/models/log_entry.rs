//! Food log entry model
//!
//! A consumed (or suggested) portion with nutrition copied at creation time.
//! Later catalog edits never retroactively change past entries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Food, FoodCategory, Nutrition};

/// One logged portion of a food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub logged_at: DateTime<Local>,
    pub food_name: String,
    pub quantity_grams: f64,
    pub category: FoodCategory,
    /// Absolute nutrition for this portion (already scaled from per-100g)
    pub nutrition: Nutrition,
}

impl LogEntry {
    /// Build an entry from a food and an already-scaled portion.
    ///
    /// Callers compute `nutrition` through the portion scaler so the scaling
    /// rules live in one place.
    pub fn from_portion(
        food: &Food,
        quantity_grams: f64,
        nutrition: Nutrition,
        logged_at: DateTime<Local>,
    ) -> Self {
        Self {
            logged_at,
            food_name: food.name.clone(),
            quantity_grams,
            category: food.category,
            nutrition,
        }
    }
}
