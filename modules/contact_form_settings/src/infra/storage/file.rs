//! File-backed settings store (YAML or JSON)

use crate::contract::RawSettings;
use crate::domain::SettingsStore;
use anyhow::{Context, Result};
use figment::providers::{Format, Json, Yaml};
use figment::Figment;
use std::path::PathBuf;

/// Reads plugin settings from a YAML or JSON document
///
/// The format follows the file extension: `.json` is read as JSON, anything
/// else as YAML. A missing file yields empty settings so every default
/// applies.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<RawSettings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Settings file not found, using defaults");
            return Ok(RawSettings::default());
        }

        let figment = if self.is_json() {
            Figment::new().merge(Json::file(&self.path))
        } else {
            Figment::new().merge(Yaml::file(&self.path))
        };

        figment
            .extract::<RawSettings>()
            .with_context(|| format!("failed to read settings from {}", self.path.display()))
    }
}
