//! NutriLog Library
//!
//! Core functionality for food, macro, and calorie-goal tracking.

pub mod app;
pub mod build_info;
pub mod cli;
pub mod models;
pub mod nutrition;
pub mod store;
