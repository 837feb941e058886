//! Store trait for reading persisted settings
//!
//! Implementations are in infra/storage.

use crate::contract::RawSettings;
use anyhow::Result;

/// Source of the stored contact form settings
pub trait SettingsStore: Send + Sync {
    /// Read the stored settings; absent fields stay `None`
    fn load(&self) -> Result<RawSettings>;
}
