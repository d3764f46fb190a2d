//! JSON file store
//!
//! Each collection lives in its own pretty-printed JSON file and every save
//! overwrites that file whole. A missing file loads as the empty collection
//! (or the default profile), so first runs need no setup step.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Food, LogEntry, UserProfile};

use super::StoreResult;

const CATALOG_FILE: &str = "foods.json";
const PROFILE_FILE: &str = "profile.json";
const LOG_FILE: &str = "log.json";

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_or<T: DeserializeOwned>(&self, file: &str, default: impl FnOnce() -> T) -> StoreResult<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            tracing::debug!(file, "data file missing, using default");
            return Ok(default());
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self, file: &str, value: &impl Serialize) -> StoreResult<()> {
        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        tracing::debug!(file, "data file saved");
        Ok(())
    }

    pub fn load_catalog(&self) -> StoreResult<Vec<Food>> {
        self.read_or(CATALOG_FILE, Vec::new)
    }

    pub fn save_catalog(&self, catalog: &[Food]) -> StoreResult<()> {
        self.write(CATALOG_FILE, &catalog)
    }

    pub fn load_profile(&self) -> StoreResult<UserProfile> {
        self.read_or(PROFILE_FILE, UserProfile::default)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.write(PROFILE_FILE, profile)
    }

    pub fn load_log(&self) -> StoreResult<Vec<LogEntry>> {
        self.read_or(LOG_FILE, Vec::new)
    }

    pub fn save_log(&self, log: &[LogEntry]) -> StoreResult<()> {
        self.write(LOG_FILE, &log)
    }
}
