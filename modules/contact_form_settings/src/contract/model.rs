//! Contract models for contact form settings
//!
//! `RawSettings` is what the host hands over after reading its stored
//! configuration. `Settings` is the record after defaults are applied, and
//! `ContactFormSettings` is the typed record consumers read once validation
//! has passed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Text-valued attributes of the settings record that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    ToEmail,
    PrependSender,
    PrependSubject,
    HoneypotField,
    SuccessFlashMessage,
}

impl Attribute {
    /// Attribute name as it appears in the stored configuration
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::ToEmail => "toEmail",
            Attribute::PrependSender => "prependSender",
            Attribute::PrependSubject => "prependSubject",
            Attribute::HoneypotField => "honeypotField",
            Attribute::SuccessFlashMessage => "successFlashMessage",
        }
    }

    /// Human-readable label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::ToEmail => "To Email",
            Attribute::PrependSender => "Prepend Sender",
            Attribute::PrependSubject => "Prepend Subject",
            Attribute::HoneypotField => "Honeypot Field",
            Attribute::SuccessFlashMessage => "Success Flash Message",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings as read from storage, before defaults are applied
///
/// Text fields keep whatever JSON value was stored so that a wrongly typed
/// value is reported by validation instead of failing deserialization.
/// An explicit `null` is treated the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(alias = "to_email")]
    pub to_email: Option<Value>,
    #[serde(alias = "prepend_sender")]
    pub prepend_sender: Option<Value>,
    #[serde(alias = "prepend_subject")]
    pub prepend_subject: Option<Value>,
    #[serde(alias = "allow_attachments")]
    pub allow_attachments: Option<bool>,
    #[serde(alias = "honeypot_field")]
    pub honeypot_field: Option<Value>,
    #[serde(alias = "success_flash_message")]
    pub success_flash_message: Option<Value>,
}

impl RawSettings {
    pub fn with_to_email(mut self, value: impl Into<Value>) -> Self {
        self.to_email = Some(value.into());
        self
    }

    pub fn with_prepend_sender(mut self, value: impl Into<Value>) -> Self {
        self.prepend_sender = Some(value.into());
        self
    }

    pub fn with_prepend_subject(mut self, value: impl Into<Value>) -> Self {
        self.prepend_subject = Some(value.into());
        self
    }

    pub fn with_allow_attachments(mut self, allow: bool) -> Self {
        self.allow_attachments = Some(allow);
        self
    }

    pub fn with_honeypot_field(mut self, value: impl Into<Value>) -> Self {
        self.honeypot_field = Some(value.into());
        self
    }

    pub fn with_success_flash_message(mut self, value: impl Into<Value>) -> Self {
        self.success_flash_message = Some(value.into());
        self
    }
}

/// Settings record with locale-resolved defaults filled in
///
/// Built by [`crate::domain::Service::build`]. The three defaulted text
/// fields are never null here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub to_email: Option<Value>,
    pub prepend_sender: Value,
    pub prepend_subject: Value,
    pub allow_attachments: bool,
    pub honeypot_field: Option<Value>,
    pub success_flash_message: Value,
}

impl Settings {
    /// Current value of a text attribute, `None` when unset
    pub fn value(&self, attribute: Attribute) -> Option<&Value> {
        match attribute {
            Attribute::ToEmail => self.to_email.as_ref(),
            Attribute::PrependSender => Some(&self.prepend_sender),
            Attribute::PrependSubject => Some(&self.prepend_subject),
            Attribute::HoneypotField => self.honeypot_field.as_ref(),
            Attribute::SuccessFlashMessage => Some(&self.success_flash_message),
        }
    }
}

/// Recipient configuration: one address string or a list of addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToEmail {
    Single(String),
    List(Vec<String>),
}

impl ToEmail {
    /// Individual recipient addresses
    ///
    /// A single string may hold several comma-separated addresses.
    /// Surrounding whitespace is trimmed and blank entries are dropped.
    pub fn recipients(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            ToEmail::Single(value) => value.split(',').collect(),
            ToEmail::List(values) => values.iter().map(String::as_str).collect(),
        };

        raw.into_iter()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Validated, strongly typed contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormSettings {
    pub to_email: ToEmail,
    pub prepend_sender: String,
    pub prepend_subject: String,
    pub allow_attachments: bool,
    pub honeypot_field: Option<String>,
    pub success_flash_message: String,
}

impl ContactFormSettings {
    /// Subject line for an outgoing message
    pub fn compose_subject(&self, subject: Option<&str>) -> String {
        match subject.map(str::trim).filter(|s| !s.is_empty()) {
            Some(subject) => format!("{} - {}", self.prepend_subject, subject),
            None => self.prepend_subject.clone(),
        }
    }

    /// Sender display name for an outgoing message
    pub fn compose_from_name(&self, from_name: Option<&str>) -> String {
        match from_name.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => format!("{} {}", self.prepend_sender, name),
            None => self.prepend_sender.clone(),
        }
    }

    /// Whether a submission filled in the honeypot field
    ///
    /// Always `false` when no honeypot field is configured.
    pub fn is_spam(&self, honeypot_value: Option<&str>) -> bool {
        if self.honeypot_field.is_none() {
            return false;
        }
        honeypot_value.is_some_and(|value| !value.is_empty())
    }
}
