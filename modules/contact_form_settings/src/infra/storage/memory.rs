//! Store for settings the host already holds in memory

use crate::contract::RawSettings;
use crate::domain::SettingsStore;
use anyhow::Result;

/// Hands out a fixed copy of the given settings on every load
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    raw: RawSettings,
}

impl InMemorySettingsStore {
    pub fn new(raw: RawSettings) -> Self {
        Self { raw }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<RawSettings> {
        Ok(self.raw.clone())
    }
}
