//! The field type registry.
//!
//! A static catalogue of the five supported field kinds: their palette ids,
//! their display labels, and the [`create_field`] factory that synthesizes a
//! fresh [`FormField`] when a palette template is dropped on the canvas.

use uuid::Uuid;

use crate::model::{FieldKind, FormField};

/// Prefix tagging palette template ids ("palette-text", "palette-select", ...).
pub const PALETTE_PREFIX: &str = "palette-";

/// Drop target id of the sortable canvas list.
pub const CANVAS_ID: &str = "form-canvas";

/// One draggable template in the field palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The kind this template produces.
    pub kind: FieldKind,
    /// Label shown on the palette card.
    pub label: &'static str,
}

impl PaletteEntry {
    /// The stable synthetic drag id of this template.
    pub fn id(&self) -> String {
        palette_id(self.kind)
    }
}

/// The palette templates, one per kind, in display order.
pub const fn palette_entries() -> [PaletteEntry; 5] {
    [
        PaletteEntry { kind: FieldKind::Text, label: "Text Input" },
        PaletteEntry { kind: FieldKind::Textarea, label: "Text Area" },
        PaletteEntry { kind: FieldKind::Select, label: "Dropdown" },
        PaletteEntry { kind: FieldKind::Checkbox, label: "Checkbox" },
        PaletteEntry { kind: FieldKind::Radio, label: "Radio Group" },
    ]
}

/// Builds the palette drag id for a kind.
pub fn palette_id(kind: FieldKind) -> String {
    format!("{PALETTE_PREFIX}{kind}")
}

/// Recovers the kind from a palette drag id, if the id is a well-formed
/// palette id carrying a known kind.
pub fn kind_from_palette_id(id: &str) -> Option<FieldKind> {
    id.strip_prefix(PALETTE_PREFIX)?.parse().ok()
}

/// Capitalizes the kind's wire name for the default label.
fn default_label(kind: FieldKind) -> String {
    let name = kind.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{} Field", first.to_uppercase(), chars.as_str()),
        None => "Field".to_string(),
    }
}

/// Synthesizes a new field of the given kind with factory defaults.
///
/// Every call assigns a freshly generated unique id and `required = false`.
/// The label defaults to a capitalized kind name ("Text Field"), except
/// checkbox, which defaults to "Checkbox Label". Text kinds get a default
/// placeholder; select and radio get three default options.
pub fn create_field(kind: FieldKind) -> FormField {
    let mut field = FormField {
        id: Uuid::new_v4().to_string(),
        kind,
        label: default_label(kind),
        placeholder: None,
        required: false,
        options: Vec::new(),
        validation: None,
    };

    match kind {
        FieldKind::Text => field.placeholder = Some("Enter text here...".to_string()),
        FieldKind::Textarea => field.placeholder = Some("Enter your message...".to_string()),
        FieldKind::Select | FieldKind::Radio => {
            field.options = vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
            ];
        }
        FieldKind::Checkbox => field.label = "Checkbox Label".to_string(),
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_ids_are_prefix_tagged() {
        for entry in palette_entries() {
            assert!(entry.id().starts_with(PALETTE_PREFIX));
            assert_eq!(kind_from_palette_id(&entry.id()), Some(entry.kind));
        }
    }

    #[test]
    fn test_kind_from_palette_id_rejects_garbage() {
        assert_eq!(kind_from_palette_id("palette-email"), None);
        assert_eq!(kind_from_palette_id("form-canvas"), None);
        assert_eq!(kind_from_palette_id("text"), None);
    }

    #[test]
    fn test_create_field_assigns_fresh_ids() {
        let a = create_field(FieldKind::Text);
        let b = create_field(FieldKind::Text);
        assert_ne!(a.id, b.id);
        assert!(!a.required);
    }

    #[test]
    fn test_create_field_text_defaults() {
        let field = create_field(FieldKind::Text);
        assert_eq!(field.label, "Text Field");
        assert_eq!(field.placeholder.as_deref(), Some("Enter text here..."));
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_create_field_textarea_defaults() {
        let field = create_field(FieldKind::Textarea);
        assert_eq!(field.label, "Textarea Field");
        assert_eq!(field.placeholder.as_deref(), Some("Enter your message..."));
    }

    #[test]
    fn test_create_field_choice_kinds_get_three_options() {
        for kind in [FieldKind::Select, FieldKind::Radio] {
            let field = create_field(kind);
            assert_eq!(field.options, vec!["Option 1", "Option 2", "Option 3"]);
            assert!(field.placeholder.is_none());
        }
    }

    #[test]
    fn test_create_field_checkbox_defaults() {
        let field = create_field(FieldKind::Checkbox);
        assert_eq!(field.label, "Checkbox Label");
        assert!(field.options.is_empty());
        assert!(field.placeholder.is_none());
    }
}
