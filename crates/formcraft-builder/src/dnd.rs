//! The drag/drop controller.
//!
//! Interprets the three-event drag lifecycle (start, over, end) raised by a
//! host pointer-tracking layer and turns gestures into [`BuilderAction`]s.
//! Two surfaces exist: the field palette (ids tagged with
//! [`PALETTE_PREFIX`]) and the sortable canvas list (target id
//! [`CANVAS_ID`], item ids = field ids).
//!
//! The "over" phase is purely advisory so the UI can show live feedback;
//! nothing structural is committed until the terminal "end" event.

use formcraft_fields::model::{FormData, FormField};
use formcraft_fields::registry::{create_field, CANVAS_ID, PALETTE_PREFIX};
use formcraft_fields::FieldKind;

use crate::state::BuilderAction;

/// The captured start of a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    /// Id of the dragged item (palette template or existing field).
    id: String,
    /// Raw kind payload carried by a palette template, validated at end.
    carried_kind: Option<String>,
}

/// Tracks one drag gesture from start to terminal end.
///
/// Gestures are strictly sequential; an `end` without a prior `start` is
/// treated as an abandoned gesture and produces nothing beyond the drag
/// flag reset.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
    hover: Option<String>,
}

impl DragController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles the drag start event.
    ///
    /// `carried_kind` is the raw field-kind payload attached to palette
    /// templates by the host layer; it is validated only at drag end.
    pub fn start(
        &mut self,
        active_id: impl Into<String>,
        carried_kind: Option<&str>,
    ) -> BuilderAction {
        self.active = Some(ActiveDrag {
            id: active_id.into(),
            carried_kind: carried_kind.map(str::to_string),
        });
        self.hover = None;
        BuilderAction::SetDragging(true)
    }

    /// Handles the advisory drag over event. Updates the hover affordance
    /// only; form structure is never touched here.
    pub fn over(&mut self, over_id: Option<&str>) {
        self.hover = over_id.map(str::to_string);
    }

    /// The id currently hovered, if any.
    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Handles the terminal drag end event against the current form.
    ///
    /// Always yields `SetDragging(false)` first. A palette template dropped
    /// on the canvas appends a freshly synthesized field (a malformed kind
    /// payload is silently abandoned); a field dropped on another field is
    /// a move-reorder. Anything else abandons the gesture.
    pub fn end(&mut self, over_id: Option<&str>, form: &FormData) -> Vec<BuilderAction> {
        let active = self.active.take();
        self.hover = None;

        let mut actions = vec![BuilderAction::SetDragging(false)];

        let Some(active) = active else {
            // End with no prior start: tolerate event loss.
            return actions;
        };
        let Some(over) = over_id else {
            // Dropped outside any valid target.
            return actions;
        };

        if active.id.starts_with(PALETTE_PREFIX) {
            if over == CANVAS_ID {
                let kind = active
                    .carried_kind
                    .as_deref()
                    .and_then(|raw| raw.parse::<FieldKind>().ok());
                if let Some(kind) = kind {
                    actions.push(BuilderAction::AddField(create_field(kind)));
                } else {
                    tracing::warn!(id = %active.id, "palette drop abandoned: unrecognized field kind");
                }
            }
            return actions;
        }

        if over != active.id {
            if let (Some(old_index), Some(new_index)) =
                (form.position_of(&active.id), form.position_of(over))
            {
                actions.push(BuilderAction::ReorderFields(move_item(
                    &form.fields,
                    old_index,
                    new_index,
                )));
            }
        }

        actions
    }
}

/// Removes the element at `old_index` and reinserts it at `new_index`,
/// preserving the relative order of all untouched elements.
pub fn move_item(fields: &[FormField], old_index: usize, new_index: usize) -> Vec<FormField> {
    let mut result = fields.to_vec();
    if old_index >= result.len() || new_index >= result.len() {
        return result;
    }
    let moved = result.remove(old_index);
    result.insert(new_index, moved);
    result
}
