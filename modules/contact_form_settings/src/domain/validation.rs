//! Validation rules for the settings record
//!
//! Rules run in declaration order and every failure is collected. Once an
//! attribute has an error, later rules skip it.

use crate::contract::{
    Attribute, ContactFormSettings, Settings, ToEmail, ValidationError, ValidationErrors,
};
use serde_json::Value;

/// Kind of check a rule performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must be present and not blank
    Required,
    /// Value, when present, must be a string
    String,
}

/// A check applied to a group of attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub attributes: &'static [Attribute],
    pub kind: RuleKind,
}

const RULES: &[Rule] = &[
    Rule {
        attributes: &[Attribute::ToEmail, Attribute::SuccessFlashMessage],
        kind: RuleKind::Required,
    },
    Rule {
        attributes: &[
            Attribute::ToEmail,
            Attribute::PrependSender,
            Attribute::PrependSubject,
            Attribute::HoneypotField,
            Attribute::SuccessFlashMessage,
        ],
        kind: RuleKind::String,
    },
];

/// The fixed rule list for contact form settings
pub fn rules() -> &'static [Rule] {
    RULES
}

impl Rule {
    /// Check one attribute value against this rule
    pub fn check(&self, attribute: Attribute, value: Option<&Value>) -> Option<ValidationError> {
        match self.kind {
            RuleKind::Required => {
                is_blank(value).then(|| ValidationError::required(attribute))
            }
            RuleKind::String => {
                let ok = match value {
                    None => true,
                    Some(value) => is_string_value(attribute, value),
                };
                (!ok).then(|| ValidationError::not_string(attribute))
            }
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

fn is_string_value(attribute: Attribute, value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        // Recipient lists are the only list-valued text attribute
        Value::Array(items) if attribute == Attribute::ToEmail => {
            items.iter().all(Value::is_string)
        }
        _ => false,
    }
}

/// Run every rule against the record and collect the failures
pub fn collect_errors(settings: &Settings) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for rule in rules() {
        for &attribute in rule.attributes {
            if errors.has(attribute) {
                continue;
            }
            if let Some(error) = rule.check(attribute, settings.value(attribute)) {
                errors.push(error);
            }
        }
    }

    errors
}

/// Validate the record and convert it into typed settings
pub fn validate(settings: &Settings) -> Result<ContactFormSettings, ValidationErrors> {
    let errors = collect_errors(settings);
    if !errors.is_empty() {
        return Err(errors);
    }

    let to_email = settings
        .to_email
        .as_ref()
        .and_then(to_email_from_value)
        .ok_or_else(|| ValidationError::required(Attribute::ToEmail))?;

    Ok(ContactFormSettings {
        to_email,
        prepend_sender: text(settings, Attribute::PrependSender)?.unwrap_or_default(),
        prepend_subject: text(settings, Attribute::PrependSubject)?.unwrap_or_default(),
        allow_attachments: settings.allow_attachments,
        honeypot_field: text(settings, Attribute::HoneypotField)?,
        success_flash_message: text(settings, Attribute::SuccessFlashMessage)?
            .ok_or_else(|| ValidationError::required(Attribute::SuccessFlashMessage))?,
    })
}

fn to_email_from_value(value: &Value) -> Option<ToEmail> {
    match value {
        Value::String(s) => Some(ToEmail::Single(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(ToEmail::List),
        _ => None,
    }
}

fn text(settings: &Settings, attribute: Attribute) -> Result<Option<String>, ValidationError> {
    match settings.value(attribute) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::not_string(attribute)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ValidationErrorKind;
    use serde_json::json;

    fn settings() -> Settings {
        Settings {
            to_email: Some(json!("a@b.com")),
            prepend_sender: json!("On behalf of"),
            prepend_subject: json!("New message from Acme"),
            allow_attachments: false,
            honeypot_field: None,
            success_flash_message: json!("Your message has been sent."),
        }
    }

    #[test]
    fn test_rule_list_shape() {
        let rules = rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].kind, RuleKind::Required);
        assert_eq!(rules[0].attributes, &[Attribute::ToEmail, Attribute::SuccessFlashMessage]);
        assert_eq!(rules[1].kind, RuleKind::String);
        assert_eq!(rules[1].attributes.len(), 5);
    }

    #[test]
    fn test_required_blank_values() {
        let rule = rules()[0];
        assert!(rule.check(Attribute::ToEmail, None).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!(null))).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!(""))).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!("   "))).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!([]))).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!("a@b.com"))).is_none());
        assert!(rule.check(Attribute::ToEmail, Some(&json!(0))).is_none());
    }

    #[test]
    fn test_string_rule() {
        let rule = rules()[1];
        assert!(rule.check(Attribute::HoneypotField, None).is_none());
        assert!(rule.check(Attribute::HoneypotField, Some(&json!("website"))).is_none());
        assert!(rule.check(Attribute::HoneypotField, Some(&json!(123))).is_some());
        assert!(rule.check(Attribute::HoneypotField, Some(&json!(["a"]))).is_some());
        assert!(rule.check(Attribute::PrependSender, Some(&json!(true))).is_some());
    }

    #[test]
    fn test_string_rule_to_email_list() {
        let rule = rules()[1];
        assert!(rule.check(Attribute::ToEmail, Some(&json!(["a@b.com", "c@d.com"]))).is_none());
        assert!(rule.check(Attribute::ToEmail, Some(&json!(["a@b.com", 5]))).is_some());
        assert!(rule.check(Attribute::ToEmail, Some(&json!({"to": "a@b.com"}))).is_some());
    }

    #[test]
    fn test_validate_ok() {
        let typed = validate(&settings()).unwrap();
        assert_eq!(typed.to_email, ToEmail::Single("a@b.com".to_string()));
        assert_eq!(typed.prepend_sender, "On behalf of");
        assert_eq!(typed.honeypot_field, None);
    }

    #[test]
    fn test_one_error_per_attribute() {
        let mut s = settings();
        s.success_flash_message = json!("");
        s.to_email = None;

        let errors = collect_errors(&s);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_attribute(Attribute::ToEmail)[0].kind, ValidationErrorKind::Required);
        assert_eq!(
            errors.for_attribute(Attribute::SuccessFlashMessage)[0].kind,
            ValidationErrorKind::Required
        );
    }

    #[test]
    fn test_required_failure_skips_type_check() {
        let mut s = settings();
        s.to_email = Some(json!([]));

        let errors = collect_errors(&s);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next().unwrap().kind, ValidationErrorKind::Required);
    }

    #[test]
    fn test_errors_in_rule_order() {
        let mut s = settings();
        s.to_email = None;
        s.honeypot_field = Some(json!(123));
        s.prepend_subject = json!(42);

        let attributes: Vec<Attribute> = collect_errors(&s).iter().map(|e| e.attribute).collect();
        assert_eq!(
            attributes,
            vec![Attribute::ToEmail, Attribute::PrependSubject, Attribute::HoneypotField]
        );
    }
}
