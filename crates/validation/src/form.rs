//! Rule-driven form validation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields;

/// A single named rule over one field's raw string value.
///
/// Rules carry the message shown when they fail; predicates never panic.
pub struct FieldRule {
    check: Box<dyn Fn(&str) -> bool>,
    message: String,
}

impl FieldRule {
    pub fn new(check: impl Fn(&str) -> bool + 'static, message: impl Into<String>) -> Self {
        Self {
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Field must be non-blank.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(|v| !v.trim().is_empty(), message)
    }

    /// Field must be at least `min` characters (blank allowed; combine with
    /// [`FieldRule::required`] if not).
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::new(move |v| v.is_empty() || v.chars().count() >= min, message)
    }

    /// Field must be a well-formed email address (blank allowed).
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(|v| v.is_empty() || fields::is_valid_email(v), message)
    }

    /// Field must be a plausible phone number (blank allowed).
    pub fn phone(message: impl Into<String>) -> Self {
        Self::new(|v| v.is_empty() || fields::is_valid_phone(v), message)
    }

    /// Field must be a structurally valid GSTIN (blank allowed).
    pub fn gstin(message: impl Into<String>) -> Self {
        Self::new(|v| v.is_empty() || fields::is_valid_gstin(v), message)
    }

    /// Field must be a structurally valid PAN (blank allowed).
    pub fn pan(message: impl Into<String>) -> Self {
        Self::new(|v| v.is_empty() || fields::is_valid_pan(v), message)
    }

    /// Field must parse as a non-negative number (blank allowed).
    pub fn non_negative_number(message: impl Into<String>) -> Self {
        Self::new(
            |v| v.is_empty() || v.trim().parse::<f64>().is_ok_and(|n| n >= 0.0),
            message,
        )
    }

    fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl core::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Outcome of validating a whole form: at most one message per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Run `rules` over `data`, collecting the **first** failing message per
/// field (later rules for that field are skipped).
///
/// A field with rules but no entry in `data` is validated as the empty
/// string, so `required` still fires for missing fields.
pub fn validate_form(
    data: &BTreeMap<String, String>,
    rules: &BTreeMap<String, Vec<FieldRule>>,
) -> FormValidation {
    let mut errors = BTreeMap::new();

    for (field, field_rules) in rules {
        let value = data.get(field).map(String::as_str).unwrap_or("");
        if let Some(rule) = field_rules.iter().find(|rule| !rule.passes(value)) {
            errors.insert(field.clone(), rule.message.clone());
        }
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
