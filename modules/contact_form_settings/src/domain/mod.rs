//! Domain layer - defaulting, validation and collaborators

pub mod i18n;
pub mod repository;
pub mod service;
pub mod site;
pub mod validation;

pub use i18n::{MessageCatalog, Translator};
pub use repository::SettingsStore;
pub use service::Service;
pub use site::{SiteContext, StaticSite};
pub use validation::{Rule, RuleKind};
