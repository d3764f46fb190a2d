//! Data models
//!
//! Rust structs for the persisted entities: foods, the user profile, and the
//! food log.

mod food;
mod log_entry;
mod nutrition;
mod profile;

pub use food::{find_matches, Food, FoodCategory};
pub use log_entry::LogEntry;
pub use nutrition::Nutrition;
pub use profile::{Gender, UserProfile};
