//! Builder state and the closed action set.
//!
//! [`BuilderState`] is the ephemeral model of one design session. It is
//! never persisted; an explicit save writes the contained [`FormData`]
//! through the gateway. All mutation goes through
//! [`reduce`](crate::reducer::reduce) with a [`BuilderAction`].

use formcraft_fields::model::{FormData, FormField};

/// Ephemeral state of one form design session.
///
/// Invariants maintained by the reducer:
/// - field ids within `form_data.fields` are unique
/// - `selected_field`, when set, references an id present in the fields
/// - entering preview mode clears the selection
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderState {
    /// The form definition being edited.
    pub form_data: FormData,
    /// The field currently open for configuration, if any.
    pub selected_field: Option<FormField>,
    /// True renders a live preview and disables editing interactions.
    pub is_preview_mode: bool,
    /// True while a drag gesture is in progress. Drives transient visual
    /// affordance only.
    pub is_dragging: bool,
}

impl BuilderState {
    /// Creates the initial state of a fresh design session.
    pub fn new() -> Self {
        Self {
            form_data: FormData {
                id: None,
                name: "Untitled Form".to_string(),
                description: "A new form created with the form builder".to_string(),
                fields: Vec::new(),
            },
            selected_field: None,
            is_preview_mode: false,
            is_dragging: false,
        }
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

/// The closed set of builder transitions.
///
/// Every edit to a design session is one of these variants; the closed enum
/// makes unrepresentable actions a compile error rather than a runtime
/// fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderAction {
    /// Replace the form data wholesale (used on load).
    SetFormData(FormData),
    /// Append a new field to the end of the list.
    AddField(FormField),
    /// Replace the field with the same id in place and select it.
    UpdateField(FormField),
    /// Remove the field with this id; clears a matching selection.
    DeleteField(String),
    /// Replace the field sequence with a permutation of itself.
    ReorderFields(Vec<FormField>),
    /// Set or clear the configuration selection.
    SelectField(Option<FormField>),
    /// Enter or leave preview mode; entering clears the selection.
    SetPreviewMode(bool),
    /// Mark a drag gesture as in progress or finished.
    SetDragging(bool),
    /// Overwrite the form's name and description.
    UpdateFormMeta {
        /// New display name.
        name: String,
        /// New description.
        description: String,
    },
}
