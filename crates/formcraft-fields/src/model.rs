//! Form definition entities.
//!
//! [`FormField`] and [`FormData`] are the shared vocabulary of the whole
//! system: the builder state machine edits them, the validation engine
//! checks respondent values against them, and the persistence gateway
//! serializes them as JSON. The wire shape uses camelCase keys; unknown
//! keys are ignored on read and `options` is omitted when empty.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of supported field kinds.
///
/// Changing the kind of an existing field is not supported; a field is
/// deleted and recreated instead, so `FormField::kind` has no mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Single choice from a dropdown.
    Select,
    /// A boolean checkbox.
    Checkbox,
    /// Single choice from a radio group.
    Radio,
}

impl FieldKind {
    /// Every supported kind, in palette display order.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
    ];

    /// The lowercase wire name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    /// Returns `true` if this kind carries an options list.
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "select" => Ok(Self::Select),
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            _ => Err(()),
        }
    }
}

/// Optional constraints applied to `text` fields at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum value length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum value length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the value must match (unanchored search).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// One field of a form definition.
///
/// The `id` is assigned at creation and never reused; within one
/// [`FormData`] all ids are unique and the `fields` order is the canonical
/// display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Opaque unique identifier, stable for the field's lifetime.
    pub id: String,
    /// The field kind, immutable after creation.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// User-editable display label.
    pub label: String,
    /// Placeholder text, meaningful only for text/textarea.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether a respondent must answer this field.
    #[serde(default)]
    pub required: bool,
    /// Choice options for select/radio; insertion order is display order.
    /// Absent on the wire is equivalent to empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Text constraints checked at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

/// A complete form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    /// Record id; absent for a form not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The single source of truth for form structure.
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormData {
    /// The field ids in display order.
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    /// Position of a field by id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns `true` if every field id occurs exactly once.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.fields.iter().all(|f| seen.insert(f.id.as_str()))
    }
}

/// Respondent answers keyed by field id.
///
/// Values are untyped JSON: strings for text-like and choice fields,
/// booleans for checkboxes. The map lives only while one form instance is
/// being filled and is discarded after a successful submit.
pub type SubmissionValueMap = HashMap<String, serde_json::Value>;

/// A recorded respondent submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Submission record id.
    pub id: String,
    /// Id of the form this submission answers.
    pub form_id: String,
    /// The respondent's answers.
    pub values: SubmissionValueMap,
    /// RFC 3339 timestamp supplied at submit time.
    pub submitted_at: String,
}

/// One row of the form listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    /// Record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// RFC 3339 creation timestamp assigned by the store.
    pub created_at: String,
    /// Number of fields in the definition.
    pub field_count: usize,
}
