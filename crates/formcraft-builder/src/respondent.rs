//! The respondent fill session.
//!
//! [`FillSession`] holds the value map for one form instance being filled
//! out, runs the validation engine on submit, and posts the payload through
//! the gateway. Values live only for the duration of the fill and are
//! discarded after a successful submit.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use formcraft_core::{FormcraftError, FormcraftResult, ValidationErrors};
use formcraft_fields::gateway::{FormGateway, SubmissionPayload};
use formcraft_fields::model::{FormData, Submission, SubmissionValueMap};
use formcraft_fields::validation::validate_form;

/// One respondent filling out one form instance.
pub struct FillSession {
    form: FormData,
    form_id: String,
    gateway: Arc<dyn FormGateway>,
    values: SubmissionValueMap,
    errors: HashMap<String, String>,
    submitting: bool,
    submitted: bool,
    last_error: Option<String>,
}

impl FillSession {
    /// Loads the form to fill. The distinct `NotFound` outcome lets the
    /// caller render a "form not found" page instead of a failure toast.
    pub async fn load(gateway: Arc<dyn FormGateway>, id: &str) -> FormcraftResult<Self> {
        let form = gateway.get_form(id).await?;
        Ok(Self {
            form,
            form_id: id.to_string(),
            gateway,
            values: SubmissionValueMap::new(),
            errors: HashMap::new(),
            submitting: false,
            submitted: false,
            last_error: None,
        })
    }

    /// The form being filled.
    pub const fn form(&self) -> &FormData {
        &self.form
    }

    /// The current value map.
    pub const fn values(&self) -> &SubmissionValueMap {
        &self.values
    }

    /// Validation messages recorded by the last blocked submit, keyed by
    /// field id.
    pub const fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// True while a submit is outstanding.
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True once a submit has succeeded.
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The most recent degraded failure message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records a field edit and optimistically clears only that field's
    /// recorded error. Full validation is not re-run until the next submit.
    pub fn set_value(&mut self, field_id: impl Into<String>, value: serde_json::Value) {
        let field_id = field_id.into();
        self.errors.remove(&field_id);
        self.values.insert(field_id, value);
    }

    /// Validates and submits the current values.
    ///
    /// A validation failure blocks the submission, records all messages for
    /// inline display, and returns the per-field error set. On success the
    /// value map is cleared and the recorded submission returned.
    pub async fn submit(&mut self) -> FormcraftResult<Submission> {
        let failures = validate_form(&self.form, &self.values);
        if !failures.is_empty() {
            self.errors = failures.clone();
            return Err(FormcraftError::Validation(ValidationErrors { fields: failures }));
        }

        let payload = SubmissionPayload {
            values: self.values.clone(),
            submitted_at: Utc::now().to_rfc3339(),
        };

        self.submitting = true;
        let result = self.gateway.submit_form(&self.form_id, payload).await;
        self.submitting = false;
        match result {
            Ok(submission) => {
                self.submitted = true;
                self.values.clear();
                self.errors.clear();
                self.last_error = None;
                Ok(submission)
            }
            Err(err) => {
                tracing::warn!(form_id = %self.form_id, error = %err, "submission failed");
                self.last_error = Some("Failed to submit form".to_string());
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for FillSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillSession")
            .field("form_id", &self.form_id)
            .field("answered", &self.values.len())
            .field("errors", &self.errors.len())
            .field("submitted", &self.submitted)
            .finish()
    }
}
