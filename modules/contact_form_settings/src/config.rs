//! Configuration for the contact form settings module

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `CONTACT_FORM__LANGUAGE=de`
pub const ENV_PREFIX: &str = "CONTACT_FORM__";

/// Contact form settings module configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Translation category for default messages
    #[serde(
        default = "default_translation_category",
        deserialize_with = "deserialize_text"
    )]
    pub translation_category: String,

    /// Language used to resolve default messages
    #[serde(default = "default_language", deserialize_with = "deserialize_text")]
    pub language: String,

    /// Display name of the current site, used in the subject default
    #[serde(default = "default_site_name", deserialize_with = "deserialize_text")]
    pub site_name: String,

    /// Directory holding `<language>.yaml` message catalogs
    #[serde(default)]
    pub messages_path: Option<PathBuf>,

    /// Stored plugin settings document (YAML or JSON)
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_category: default_translation_category(),
            language: default_language(),
            site_name: default_site_name(),
            messages_path: None,
            settings_path: None,
        }
    }
}

impl Config {
    /// Load from a YAML file, then apply `CONTACT_FORM__*` environment overrides
    ///
    /// A missing file leaves every field at its default.
    pub fn load(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .with_context(|| format!("invalid contact form config {}", path.display()))
    }
}

/// Accept scalar values for text fields
///
/// YAML and environment providers type `2024` or `true` as numbers and
/// booleans; those are kept as their textual form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}

fn default_translation_category() -> String {
    crate::domain::i18n::CATEGORY.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_site_name() -> String {
    "Default Site".to_string()
}
