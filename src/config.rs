//! Application Settings
//! Optional JSON settings file with the default CSV path and date range.
//! A missing or malformed file falls back to built-in defaults.

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "booking_insights.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV to load at startup, when it exists.
    pub csv_path: Option<PathBuf>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: Some(PathBuf::from("data/hotel_bookings_sample.csv")),
            start_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2017, 12, 31).unwrap(),
        }
    }
}

impl AppConfig {
    /// Load settings, falling back to defaults when the file is absent or
    /// unreadable. Never fails; problems are logged.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring settings file {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).context("parsing settings JSON")
    }
}
