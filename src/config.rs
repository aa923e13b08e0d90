//! Target settings: daily and weekly working-time goals.
//!
//! Stored as a small YAML file in the platform config directory. Missing or
//! unreadable files fall back to the defaults (7h30 daily, 41h weekly); the
//! file is only written on an explicit `config` command.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_daily_hours")]
    pub daily_hours: i64,
    #[serde(default = "default_daily_minutes")]
    pub daily_minutes: i64,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: i64,
}

fn default_daily_hours() -> i64 {
    7
}
fn default_daily_minutes() -> i64 {
    30
}
fn default_weekly_hours() -> i64 {
    41
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_hours: default_daily_hours(),
            daily_minutes: default_daily_minutes(),
            weekly_hours: default_weekly_hours(),
        }
    }
}

impl Settings {
    pub fn daily_target_minutes(&self) -> i64 {
        self.daily_hours * 60 + self.daily_minutes
    }

    pub fn weekly_target_minutes(&self) -> i64 {
        self.weekly_hours * 60
    }

    /// Standard configuration directory for the platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tictrack")
    }

    /// Full path of the settings file.
    pub fn settings_file() -> PathBuf {
        Self::config_dir().join("settings.yaml")
    }

    /// Full path of the records map.
    pub fn records_file() -> PathBuf {
        Self::config_dir().join("records.json")
    }

    /// Load settings from `path`, or defaults if the file is missing or does
    /// not parse. Per-field serde defaults let partial files load; fields are
    /// sanitized so a hand-edited file can never produce negative targets.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str::<Self>(&content)
                .unwrap_or_default()
                .sanitized(),
            Err(_) => Self::default(),
        }
    }

    /// Targets are non-negative by invariant; anything below zero in the
    /// file is clamped up.
    fn sanitized(mut self) -> Self {
        self.daily_hours = self.daily_hours.max(0);
        self.daily_minutes = self.daily_minutes.max(0);
        self.weekly_hours = self.weekly_hours.max(0);
        self
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
