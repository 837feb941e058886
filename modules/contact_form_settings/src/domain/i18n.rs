//! Message translation for locale-dependent defaults

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Translation category used for every contact form message
pub const CATEGORY: &str = "contactform";

/// Source messages for the defaulted settings
pub mod messages {
    pub const PREPEND_SENDER: &str = "On behalf of";
    pub const PREPEND_SUBJECT: &str = "New message from {siteName}";
    pub const SUCCESS_FLASH_MESSAGE: &str = "Your message has been sent.";
}

/// Resolves a source message into the active language
///
/// Implementations must fall back to the source message when no
/// translation is known, and substitute `{name}` placeholders from `params`.
pub trait Translator: Send + Sync {
    fn translate(&self, category: &str, message: &str, params: &[(&str, &str)]) -> String;
}

/// Replace `{name}` placeholders with their parameter values
///
/// Placeholders without a matching parameter are left as written.
pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// In-memory translations for a single language
///
/// Layout: category -> source message -> translated message. The YAML form
/// is the same nesting:
///
/// ```yaml
/// contactform:
///   "On behalf of": "Im Auftrag von"
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    language: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Catalog with no translations; every lookup returns the source message
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            messages: HashMap::new(),
        }
    }

    pub fn from_yaml_str(language: impl Into<String>, yaml: &str) -> Result<Self> {
        let messages: HashMap<String, HashMap<String, String>> =
            serde_yaml::from_str(yaml).context("invalid message catalog")?;
        Ok(Self {
            language: language.into(),
            messages,
        })
    }

    /// Load `<dir>/<language>.yaml`, or an empty catalog if it does not exist
    pub fn load(dir: &Path, language: &str) -> Result<Self> {
        let path = dir.join(format!("{}.yaml", language));
        if !path.exists() {
            tracing::debug!(
                path = %path.display(),
                "No message catalog found, using source messages"
            );
            return Ok(Self::empty(language));
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read message catalog {}", path.display()))?;
        let catalog = Self::from_yaml_str(language, &contents)?;
        tracing::debug!(
            path = %path.display(),
            categories = catalog.messages.len(),
            "Loaded message catalog"
        );
        Ok(catalog)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn lookup(&self, category: &str, message: &str) -> Option<&str> {
        self.messages
            .get(category)
            .and_then(|m| m.get(message))
            .map(String::as_str)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, category: &str, message: &str, params: &[(&str, &str)]) -> String {
        let template = self.lookup(category, message).unwrap_or(message);
        format_message(template, params)
    }
}
