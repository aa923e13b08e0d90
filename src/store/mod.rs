//! Whole-map JSON record store.
//!
//! The persisted state is a single JSON object mapping "YYYY-MM-DD" keys to
//! day records. Every mutation is a load-mutate-save of the whole map; the
//! data volume is one user's punch history, so this stays trivially cheap and
//! avoids partial-write states. Single active writer assumed.

use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::utils::date;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Date-keyed map of day records. BTreeMap keeps keys in chronological
/// order, which makes report iteration deterministic.
pub type RecordMap = BTreeMap<String, DayRecord>;

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full map. A missing file is an empty map; an unreadable or
    /// malformed file is a storage error (never silently discarded).
    pub fn load_map(&self) -> AppResult<RecordMap> {
        if !self.path.exists() {
            return Ok(RecordMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))?;
        let map: RecordMap = serde_json::from_str(&content)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))?;

        // Keys are validated here so downstream aggregation can assume them.
        if let Some(bad) = map.keys().find(|k| date::parse_date(k).is_none()) {
            return Err(AppError::Storage(format!(
                "{}: invalid date key '{}'",
                self.path.display(),
                bad
            )));
        }

        Ok(map)
    }

    /// Save the full map, pruning records that carry no information.
    pub fn save_map(&self, map: &RecordMap) -> AppResult<()> {
        let pruned: RecordMap = map
            .iter()
            .filter(|(_, rec)| !rec.is_empty())
            .map(|(k, rec)| (k.clone(), rec.clone()))
            .collect();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&pruned)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

/// Explicit "absent day is an empty day" default.
pub fn day_or_default(map: &RecordMap, key: &str) -> DayRecord {
    map.get(key).cloned().unwrap_or_default()
}
