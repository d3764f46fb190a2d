//! Persistence module
//!
//! Whole-file JSON storage for the three collections: food catalog, user
//! profile, and food log.

mod files;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

pub use files::DataStore;
