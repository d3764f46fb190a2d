//! Application state
//!
//! The in-memory session: catalog, profile, and log, loaded once at startup
//! and passed explicitly into every operation. No process-wide globals.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::{Food, LogEntry, UserProfile};
use crate::nutrition::{self, DailyTotals, NutritionError};
use crate::store::{DataStore, StoreError};

/// Application-level error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Nutrition(#[from] NutritionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Everything the session holds in memory
#[derive(Debug)]
pub struct AppState {
    pub catalog: Vec<Food>,
    pub profile: UserProfile,
    pub log: Vec<LogEntry>,
}

impl AppState {
    /// Load all three collections from the store
    pub fn load(store: &DataStore) -> AppResult<Self> {
        Ok(Self {
            catalog: store.load_catalog()?,
            profile: store.load_profile()?,
            log: store.load_log()?,
        })
    }

    /// Write all three collections back to the store
    pub fn save_all(&self, store: &DataStore) -> AppResult<()> {
        store.save_profile(&self.profile)?;
        store.save_log(&self.log)?;
        store.save_catalog(&self.catalog)?;
        Ok(())
    }

    /// Scale a portion of `food` and append it to the log.
    ///
    /// Returns the created entry for display. The entry copies the scaled
    /// values, so later catalog edits leave it untouched.
    pub fn log_food(
        &mut self,
        food_index: usize,
        grams: f64,
        at: DateTime<Local>,
    ) -> AppResult<LogEntry> {
        let food = self.catalog.get(food_index).ok_or_else(|| {
            NutritionError::InvalidInput(format!("no food at index {food_index}"))
        })?;
        let nutrition = nutrition::scale_per_100g(&food.per_100g, grams)?;
        let entry = LogEntry::from_portion(food, grams, nutrition, at);
        self.log.push(entry.clone());
        Ok(entry)
    }

    /// Today's entries, in log order
    pub fn todays_entries(&self) -> Vec<&LogEntry> {
        let today = Local::now().date_naive();
        self.log
            .iter()
            .filter(|e| e.logged_at.date_naive() == today)
            .collect()
    }

    /// Totals for today's local calendar date
    pub fn todays_totals(&self) -> DailyTotals {
        nutrition::daily_totals(&self.log, Local::now().date_naive())
    }
}
