//! The field validation engine.
//!
//! Pure functions checking respondent values against a form definition.
//! Both the respondent session and the HTTP service run this same engine,
//! so the two sides agree on semantics by construction.
//!
//! Rules run in a fixed order per field and the first failing rule wins:
//! required first, then (for text fields with constraints) minimum length,
//! maximum length, and pattern.

use regex::Regex;
use serde_json::Value;

use crate::model::{FieldKind, FormData, FormField, SubmissionValueMap};

/// Returns `true` if the bound value counts as answered.
///
/// Absent and `null` values are unanswered, as are strings that are empty
/// or whitespace-only. Any other value, including `false`, is an answer.
fn is_answered(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Validates one field against its bound value.
///
/// Returns `None` when the value passes, or the human-readable message of
/// the first failing rule.
pub fn validate_field(field: &FormField, value: Option<&Value>) -> Option<String> {
    if field.required && !is_answered(value) {
        return Some(format!("{} is required", field.label));
    }

    if field.kind == FieldKind::Text {
        if let (Some(Value::String(text)), Some(rules)) = (value, &field.validation) {
            if text.is_empty() {
                return None;
            }
            let length = text.chars().count();
            if let Some(min) = rules.min_length {
                if length < min {
                    return Some(format!(
                        "{} must be at least {min} characters",
                        field.label
                    ));
                }
            }
            if let Some(max) = rules.max_length {
                if length > max {
                    return Some(format!(
                        "{} must be no more than {max} characters",
                        field.label
                    ));
                }
            }
            if let Some(pattern) = &rules.pattern {
                // An unparsable pattern is an authoring bug in the form
                // definition, not a respondent error; the check is skipped.
                if let Ok(regex) = Regex::new(pattern) {
                    if !regex.is_match(text) {
                        return Some(format!("{} format is invalid", field.label));
                    }
                }
            }
        }
    }

    None
}

/// Validates every field of a form against a value map.
///
/// The result maps field id to the first failing message; an empty map
/// means the submission may proceed.
pub fn validate_form(
    form: &FormData,
    values: &SubmissionValueMap,
) -> std::collections::HashMap<String, String> {
    let mut errors = std::collections::HashMap::new();
    for field in &form.fields {
        if let Some(message) = validate_field(field, values.get(&field.id)) {
            errors.insert(field.id.clone(), message);
        }
    }
    errors
}
