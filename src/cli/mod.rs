//! Console interface
//!
//! Menu loop, prompts, and rendering. No nutrition logic lives here; these
//! functions call the engine and format its return values.

pub mod console;
pub mod foods;
pub mod input;
pub mod log;
pub mod menu;
pub mod profile;
pub mod suggest;

pub use menu::run;
