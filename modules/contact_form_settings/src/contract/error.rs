//! Contract error types for contact form settings

use super::model::Attribute;
use std::fmt;

/// Which rule an attribute failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required attribute is missing or blank
    Required,
    /// Attribute holds something other than a string
    NotString,
}

/// A single attribute-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub attribute: Attribute,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn required(attribute: Attribute) -> Self {
        Self {
            attribute,
            kind: ValidationErrorKind::Required,
            message: format!("{} cannot be blank.", attribute.label()),
        }
    }

    pub fn not_string(attribute: Attribute) -> Self {
        let message = match attribute {
            Attribute::ToEmail => {
                format!("{} must be a string or a list of strings.", attribute.label())
            }
            _ => format!("{} must be a string.", attribute.label()),
        };
        Self {
            attribute,
            kind: ValidationErrorKind::NotString,
            message,
        }
    }
}

/// Every validation failure from one validation pass, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Whether the attribute already has an error
    pub fn has(&self, attribute: Attribute) -> bool {
        self.errors.iter().any(|e| e.attribute == attribute)
    }

    /// Errors reported for one attribute
    pub fn for_attribute(&self, attribute: Attribute) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.attribute == attribute)
            .collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.attribute, e.message))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Contact form settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Stored settings did not pass validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Stored settings could not be read
    #[error("Failed to load settings: {details}")]
    Load { details: String },
}
