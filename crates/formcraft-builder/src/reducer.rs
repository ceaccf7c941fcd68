//! The builder state machine.
//!
//! A single pure transition function over [`BuilderState`] and the closed
//! [`BuilderAction`] set. Every transition returns a fresh state value and
//! never panics; transitions that would corrupt the field-id-uniqueness
//! invariant are rejected as logged no-ops.

use std::collections::HashSet;

use crate::state::{BuilderAction, BuilderState};

/// Applies one action to the state, returning the next state.
///
/// The previous state is never mutated, so consumers can detect change by
/// equality against the old value.
pub fn reduce(state: &BuilderState, action: BuilderAction) -> BuilderState {
    let mut next = state.clone();
    match action {
        BuilderAction::SetFormData(data) => {
            next.form_data = data;
            // A stale selection must not outlive the field it points at.
            if let Some(selected) = &next.selected_field {
                if next.form_data.field(&selected.id).is_none() {
                    next.selected_field = None;
                }
            }
        }
        BuilderAction::AddField(field) => {
            if next.form_data.field(&field.id).is_some() {
                tracing::warn!(id = %field.id, "add rejected: duplicate field id");
                return state.clone();
            }
            next.form_data.fields.push(field);
        }
        BuilderAction::UpdateField(field) => {
            let Some(position) = next.form_data.position_of(&field.id) else {
                tracing::warn!(id = %field.id, "update rejected: unknown field id");
                return state.clone();
            };
            next.form_data.fields[position] = field.clone();
            next.selected_field = Some(field);
        }
        BuilderAction::DeleteField(id) => {
            next.form_data.fields.retain(|f| f.id != id);
            if next.selected_field.as_ref().is_some_and(|f| f.id == id) {
                next.selected_field = None;
            }
        }
        BuilderAction::ReorderFields(new_order) => {
            if !is_permutation(state, &new_order) {
                tracing::warn!("reorder rejected: payload is not a permutation of current fields");
                return state.clone();
            }
            next.form_data.fields = new_order;
        }
        BuilderAction::SelectField(field) => {
            next.selected_field = field;
        }
        BuilderAction::SetPreviewMode(flag) => {
            next.is_preview_mode = flag;
            if flag {
                next.selected_field = None;
            }
        }
        BuilderAction::SetDragging(flag) => {
            next.is_dragging = flag;
        }
        BuilderAction::UpdateFormMeta { name, description } => {
            next.form_data.name = name;
            next.form_data.description = description;
        }
    }
    next
}

/// Whether `new_order` holds exactly the current field ids, order aside.
fn is_permutation(state: &BuilderState, new_order: &[formcraft_fields::FormField]) -> bool {
    if new_order.len() != state.form_data.fields.len() {
        return false;
    }
    let current: HashSet<&str> = state.form_data.fields.iter().map(|f| f.id.as_str()).collect();
    let proposed: HashSet<&str> = new_order.iter().map(|f| f.id.as_str()).collect();
    proposed.len() == new_order.len() && current == proposed
}
