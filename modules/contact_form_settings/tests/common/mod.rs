//! Common test utilities: recording translator, switchable site, service builder

#![allow(dead_code)]

use contact_form_settings::contract::RawSettings;
use contact_form_settings::domain::i18n::format_message;
use contact_form_settings::domain::{Service, SiteContext, Translator};
use contact_form_settings::infra::storage::InMemorySettingsStore;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("contact_form_settings=debug")
        .with_test_writer()
        .try_init();
}

/// Translator that records every lookup and serves optional overrides
#[derive(Default)]
pub struct RecordingTranslator {
    translations: HashMap<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, message: &str, translation: &str) -> Self {
        self.translations.insert(message.to_string(), translation.to_string());
        self
    }

    /// (category, message) pairs in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl Translator for RecordingTranslator {
    fn translate(&self, category: &str, message: &str, params: &[(&str, &str)]) -> String {
        self.calls.lock().push((category.to_string(), message.to_string()));
        let template = self
            .translations
            .get(message)
            .map(String::as_str)
            .unwrap_or(message);
        format_message(template, params)
    }
}

/// Site context whose current site can change between builds
pub struct SwitchableSite {
    name: RwLock<String>,
}

impl SwitchableSite {
    pub fn new(name: &str) -> Self {
        Self {
            name: RwLock::new(name.to_string()),
        }
    }

    pub fn switch_to(&self, name: &str) {
        *self.name.write() = name.to_string();
    }
}

impl SiteContext for SwitchableSite {
    fn current_site_name(&self) -> String {
        self.name.read().clone()
    }
}

/// Service plus handles on its collaborators
pub struct TestHarness {
    pub service: Service,
    pub translator: Arc<RecordingTranslator>,
    pub site: Arc<SwitchableSite>,
}

impl TestHarness {
    pub fn new(site_name: &str) -> Self {
        Self::with_translator(site_name, RecordingTranslator::new())
    }

    pub fn with_translator(site_name: &str, translator: RecordingTranslator) -> Self {
        Self::with_store(site_name, translator, RawSettings::default())
    }

    pub fn with_store(
        site_name: &str,
        translator: RecordingTranslator,
        stored: RawSettings,
    ) -> Self {
        init_tracing();
        let translator = Arc::new(translator);
        let site = Arc::new(SwitchableSite::new(site_name));
        let service = Service::new(
            Arc::new(InMemorySettingsStore::new(stored)),
            translator.clone(),
            site.clone(),
        );
        Self {
            service,
            translator,
            site,
        }
    }
}
