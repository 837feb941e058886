//! Storage adapters for persisted settings

pub mod file;
pub mod memory;

pub use file::FileSettingsStore;
pub use memory::InMemorySettingsStore;
