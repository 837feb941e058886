//! Module wiring: config in, ready-to-use service out

use crate::config::Config;
use crate::contract::{ContactFormSettings, SettingsError};
use crate::domain::{MessageCatalog, Service, SettingsStore, StaticSite};
use crate::infra::storage::{FileSettingsStore, InMemorySettingsStore};
use anyhow::Result;
use std::sync::Arc;

/// Contact form settings module
pub struct ContactFormSettingsModule {
    config: Config,
    service: Arc<Service>,
}

impl ContactFormSettingsModule {
    /// Build the message catalog, site context, store and service from config
    pub fn init(config: Config) -> Result<Self> {
        let catalog = match &config.messages_path {
            Some(dir) => MessageCatalog::load(dir, &config.language)?,
            None => MessageCatalog::empty(config.language.clone()),
        };

        let store: Arc<dyn SettingsStore> = match &config.settings_path {
            Some(path) => Arc::new(FileSettingsStore::new(path)),
            None => Arc::new(InMemorySettingsStore::default()),
        };

        let site = Arc::new(StaticSite::new(config.site_name.clone()));

        let service = Arc::new(
            Service::new(store, Arc::new(catalog), site)
                .with_category(config.translation_category.clone()),
        );

        tracing::info!(
            language = %config.language,
            site = %config.site_name,
            category = %config.translation_category,
            "Contact form settings module initialized"
        );

        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Load, default and validate the stored settings
    pub fn load_settings(&self) -> Result<ContactFormSettings, SettingsError> {
        self.service.load()
    }
}
