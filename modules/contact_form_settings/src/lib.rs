//! Contact Form Settings Module
//!
//! Plugin settings for a CMS contact form: recipients, subject and sender
//! prefixes, attachment and honeypot options, and the success flash message.
//! Unset text fields receive locale-resolved defaults at build time and the
//! record is checked against a fixed rule list before use.

// Public exports
pub mod contract;
pub use contract::{
    Attribute, ContactFormSettings, RawSettings, Settings, SettingsError, ToEmail,
    ValidationError, ValidationErrorKind, ValidationErrors,
};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{MessageCatalog, Service, SettingsStore, SiteContext, StaticSite, Translator};

pub mod module;
pub use module::ContactFormSettingsModule;

#[doc(hidden)]
pub mod infra;
