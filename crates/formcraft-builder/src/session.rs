//! The designer session.
//!
//! [`DesignerSession`] owns one [`BuilderState`] for the lifetime of a
//! design interaction, feeds drag events through the [`DragController`],
//! and loads/saves the form through a [`FormGateway`]. Gateway failures
//! degrade to a recorded failure message rather than propagating a fault;
//! only "not found" is surfaced as a distinct outcome so callers can
//! navigate away.

use std::sync::Arc;

use formcraft_core::FormcraftResult;
use formcraft_fields::gateway::{FormDraft, FormGateway};
use formcraft_fields::model::FormData;

use crate::dnd::DragController;
use crate::reducer::reduce;
use crate::state::{BuilderAction, BuilderState};

/// One live editing interaction over a form definition.
///
/// Constructed fresh per session and discarded on navigation away; nothing
/// is persisted until [`save`](Self::save) is called. Busy flags are
/// exposed for UI affordance but in-flight calls are not queued or
/// coalesced; overlapping saves race at the gateway's discretion.
pub struct DesignerSession {
    state: BuilderState,
    drag: DragController,
    gateway: Arc<dyn FormGateway>,
    loading: bool,
    saving: bool,
    last_error: Option<String>,
}

impl DesignerSession {
    /// Starts a session over a fresh, unpersisted form.
    pub fn new(gateway: Arc<dyn FormGateway>) -> Self {
        Self {
            state: BuilderState::new(),
            drag: DragController::new(),
            gateway,
            loading: false,
            saving: false,
            last_error: None,
        }
    }

    /// The current builder state.
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// True while a load is outstanding.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a save is outstanding.
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// The most recent degraded failure message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Applies one action through the reducer.
    pub fn dispatch(&mut self, action: BuilderAction) {
        self.state = reduce(&self.state, action);
    }

    /// Hydrates the session from a stored form.
    ///
    /// On success the form data replaces the working copy wholesale. A
    /// missing id is returned as the distinct `NotFound` outcome; any other
    /// gateway fault is recorded and returned as a generic failure.
    pub async fn load(&mut self, id: &str) -> FormcraftResult<()> {
        self.loading = true;
        let result = self.gateway.get_form(id).await;
        self.loading = false;
        match result {
            Ok(form) => {
                self.dispatch(BuilderAction::SetFormData(form));
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "form load failed");
                self.last_error = Some(if err.is_not_found() {
                    "Form not found".to_string()
                } else {
                    "Failed to load form".to_string()
                });
                Err(err)
            }
        }
    }

    /// Writes the working form out through the gateway.
    ///
    /// An already-persisted form is updated in place; an unpersisted one is
    /// created and the session adopts the assigned id.
    pub async fn save(&mut self) -> FormcraftResult<()> {
        self.saving = true;
        let form = self.state.form_data.clone();
        let result = match &form.id {
            Some(id) => self.gateway.update_form(id, &form).await,
            None => {
                self.gateway
                    .create_form(FormDraft {
                        name: form.name.clone(),
                        description: form.description.clone(),
                        fields: form.fields.clone(),
                    })
                    .await
            }
        };
        self.saving = false;
        match result {
            Ok(saved) => {
                if self.state.form_data.id.is_none() {
                    self.adopt_identity(saved);
                }
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "form save failed");
                self.last_error = Some("Failed to save form".to_string());
                Err(err)
            }
        }
    }

    /// Keeps the working copy but takes over the id assigned at creation.
    fn adopt_identity(&mut self, saved: FormData) {
        let mut form = self.state.form_data.clone();
        form.id = saved.id;
        self.dispatch(BuilderAction::SetFormData(form));
    }

    /// Flips preview mode and clears the selection either way.
    pub fn toggle_preview(&mut self) {
        let flag = !self.state.is_preview_mode;
        self.dispatch(BuilderAction::SetPreviewMode(flag));
        self.dispatch(BuilderAction::SelectField(None));
    }

    /// Overwrites the form's name and description.
    pub fn update_meta(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.dispatch(BuilderAction::UpdateFormMeta {
            name: name.into(),
            description: description.into(),
        });
    }

    /// Forwards a drag start event.
    pub fn drag_start(&mut self, active_id: &str, carried_kind: Option<&str>) {
        let action = self.drag.start(active_id, carried_kind);
        self.dispatch(action);
    }

    /// Forwards an advisory drag over event.
    pub fn drag_over(&mut self, over_id: Option<&str>) {
        self.drag.over(over_id);
    }

    /// Forwards a terminal drag end event and applies the resulting
    /// structural actions in order.
    pub fn drag_end(&mut self, over_id: Option<&str>) {
        let actions = self.drag.end(over_id, &self.state.form_data);
        for action in actions {
            self.dispatch(action);
        }
    }
}

impl std::fmt::Debug for DesignerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerSession")
            .field("form_id", &self.state.form_data.id)
            .field("field_count", &self.state.form_data.fields.len())
            .field("is_preview_mode", &self.state.is_preview_mode)
            .field("loading", &self.loading)
            .field("saving", &self.saving)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGateway;
    use formcraft_core::FormcraftError;
    use formcraft_fields::registry::{palette_id, CANVAS_ID};
    use formcraft_fields::FieldKind;

    #[tokio::test]
    async fn test_new_session_is_fresh() {
        let session = DesignerSession::new(Arc::new(MockGateway::new()));
        assert!(session.state().form_data.id.is_none());
        assert!(!session.is_loading());
        assert!(!session.is_saving());
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn test_palette_drag_appends_field() {
        let mut session = DesignerSession::new(Arc::new(MockGateway::new()));
        session.drag_start(&palette_id(FieldKind::Select), Some("select"));
        assert!(session.state().is_dragging);
        session.drag_over(Some(CANVAS_ID));
        session.drag_end(Some(CANVAS_ID));

        let state = session.state();
        assert!(!state.is_dragging);
        assert_eq!(state.form_data.fields.len(), 1);
        assert_eq!(state.form_data.fields[0].kind, FieldKind::Select);
        assert_eq!(state.form_data.fields[0].options.len(), 3);
    }

    #[tokio::test]
    async fn test_save_unpersisted_form_adopts_id() {
        let gateway = Arc::new(MockGateway::new());
        let mut session = DesignerSession::new(gateway.clone());
        session.update_meta("Survey", "Quarterly survey");
        session.save().await.unwrap();

        assert!(session.state().form_data.id.is_some());
        let id = session.state().form_data.id.clone().unwrap();
        let stored = gateway.get_form(&id).await.unwrap();
        assert_eq!(stored.name, "Survey");
    }

    #[tokio::test]
    async fn test_save_persisted_form_updates_in_place() {
        let gateway = Arc::new(MockGateway::new());
        let mut session = DesignerSession::new(gateway.clone());
        session.save().await.unwrap();
        let id = session.state().form_data.id.clone().unwrap();

        session.update_meta("Renamed", "New description");
        session.save().await.unwrap();

        let stored = gateway.get_form(&id).await.unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(gateway.list_forms().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_unknown_form_reports_not_found() {
        let mut session = DesignerSession::new(Arc::new(MockGateway::new()));
        let result = session.load("no-such-form").await;
        assert!(matches!(result, Err(FormcraftError::NotFound(_))));
        assert_eq!(session.last_error(), Some("Form not found"));
        // Working copy untouched
        assert_eq!(session.state().form_data.name, "Untitled Form");
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_message() {
        let gateway = Arc::new(MockGateway::new().failing());
        let mut session = DesignerSession::new(gateway);
        let result = session.load("any").await;
        assert!(matches!(result, Err(FormcraftError::Transport(_))));
        assert_eq!(session.last_error(), Some("Failed to load form"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_save_failure_degrades_to_message() {
        let gateway = Arc::new(MockGateway::new().failing());
        let mut session = DesignerSession::new(gateway);
        let result = session.save().await;
        assert!(result.is_err());
        assert_eq!(session.last_error(), Some("Failed to save form"));
        assert!(!session.is_saving());
    }

    #[tokio::test]
    async fn test_toggle_preview_clears_selection() {
        let mut session = DesignerSession::new(Arc::new(MockGateway::new()));
        session.drag_start(&palette_id(FieldKind::Text), Some("text"));
        session.drag_end(Some(CANVAS_ID));
        let field = session.state().form_data.fields[0].clone();
        session.dispatch(BuilderAction::SelectField(Some(field)));
        assert!(session.state().selected_field.is_some());

        session.toggle_preview();
        assert!(session.state().is_preview_mode);
        assert!(session.state().selected_field.is_none());

        session.toggle_preview();
        assert!(!session.state().is_preview_mode);
    }
}
