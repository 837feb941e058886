//! Contract layer - public types shared with consumers of the settings
//!
//! Transport-agnostic models and errors. Collaborator traits live in the
//! domain layer.

pub mod error;
pub mod model;

pub use error::{SettingsError, ValidationError, ValidationErrorKind, ValidationErrors};
pub use model::{Attribute, ContactFormSettings, RawSettings, Settings, ToEmail};
