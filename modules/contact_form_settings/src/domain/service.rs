//! Domain service - builds and validates contact form settings

use super::i18n::{messages, Translator, CATEGORY};
use super::repository::SettingsStore;
use super::site::SiteContext;
use super::validation::{self, Rule};
use crate::contract::{ContactFormSettings, RawSettings, Settings, SettingsError, ValidationErrors};
use serde_json::Value;
use std::sync::Arc;

/// Domain service for contact form settings
pub struct Service {
    store: Arc<dyn SettingsStore>,
    translator: Arc<dyn Translator>,
    site: Arc<dyn SiteContext>,
    /// Translation category for default messages
    category: String,
}

impl Service {
    /// Create a new service instance using the default translation category
    pub fn new(
        store: Arc<dyn SettingsStore>,
        translator: Arc<dyn Translator>,
        site: Arc<dyn SiteContext>,
    ) -> Self {
        Self {
            store,
            translator,
            site,
            category: CATEGORY.to_string(),
        }
    }

    /// Override the translation category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Build the settings record, filling unset text fields with defaults
    ///
    /// The translator and site context are only consulted for fields the
    /// caller left unset. Never fails.
    pub fn build(&self, raw: RawSettings) -> Settings {
        let prepend_sender = raw.prepend_sender.unwrap_or_else(|| {
            Value::String(self.translate(messages::PREPEND_SENDER, &[]))
        });

        let prepend_subject = raw.prepend_subject.unwrap_or_else(|| {
            let site_name = self.site.current_site_name();
            let params = [("siteName", site_name.as_str())];
            Value::String(self.translate(messages::PREPEND_SUBJECT, &params))
        });

        let success_flash_message = raw.success_flash_message.unwrap_or_else(|| {
            Value::String(self.translate(messages::SUCCESS_FLASH_MESSAGE, &[]))
        });

        Settings {
            to_email: raw.to_email,
            prepend_sender,
            prepend_subject,
            allow_attachments: raw.allow_attachments.unwrap_or(false),
            honeypot_field: raw.honeypot_field,
            success_flash_message,
        }
    }

    /// Validate a built record and convert it into typed settings
    pub fn validate(&self, settings: &Settings) -> Result<ContactFormSettings, ValidationErrors> {
        validation::validate(settings)
    }

    /// Validation rules applied by [`Service::validate`]
    pub fn rules(&self) -> &'static [Rule] {
        validation::rules()
    }

    /// Load stored settings, apply defaults and validate
    pub fn load(&self) -> Result<ContactFormSettings, SettingsError> {
        let raw = self.store.load().map_err(|e| SettingsError::Load {
            details: format!("{:#}", e),
        })?;

        let settings = self.build(raw);
        match self.validate(&settings) {
            Ok(typed) => {
                tracing::debug!(
                    recipients = typed.to_email.recipients().len(),
                    allow_attachments = typed.allow_attachments,
                    honeypot = typed.honeypot_field.is_some(),
                    "Contact form settings loaded"
                );
                Ok(typed)
            }
            Err(errors) => {
                tracing::warn!(errors = %errors, "Contact form settings failed validation");
                Err(SettingsError::Validation(errors))
            }
        }
    }

    fn translate(&self, message: &str, params: &[(&str, &str)]) -> String {
        self.translator.translate(&self.category, message, params)
    }
}
