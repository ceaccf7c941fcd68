//! The persistence gateway contract.
//!
//! Sessions consume persistence through this trait rather than a concrete
//! transport, so builder logic is testable without a server and the store
//! can serve in-process. `NotFound` is the one distinguished failure; any
//! other gateway fault degrades to a generic reported failure at the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use formcraft_core::FormcraftResult;

use crate::model::{FormData, FormField, FormSummary, Submission, SubmissionValueMap};

/// Payload for creating a new form record. The gateway assigns the id and
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Initial field definitions.
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// Payload for recording a respondent submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Answers keyed by field id.
    pub values: SubmissionValueMap,
    /// RFC 3339 timestamp captured at submit time.
    pub submitted_at: String,
}

/// CRUD over form records and submissions.
#[async_trait]
pub trait FormGateway: Send + Sync {
    /// Lists all stored forms as summaries.
    async fn list_forms(&self) -> FormcraftResult<Vec<FormSummary>>;

    /// Fetches a form definition by id.
    async fn get_form(&self, id: &str) -> FormcraftResult<FormData>;

    /// Creates a new form record, returning it with id and timestamp set.
    async fn create_form(&self, draft: FormDraft) -> FormcraftResult<FormData>;

    /// Replaces a stored form definition.
    async fn update_form(&self, id: &str, form: &FormData) -> FormcraftResult<FormData>;

    /// Deletes a form and its submissions.
    async fn delete_form(&self, id: &str) -> FormcraftResult<()>;

    /// Records a submission against a form.
    async fn submit_form(
        &self,
        id: &str,
        payload: SubmissionPayload,
    ) -> FormcraftResult<Submission>;

    /// Lists the submissions recorded against a form.
    async fn list_submissions(&self, id: &str) -> FormcraftResult<Vec<Submission>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_payload_wire_shape() {
        let mut values = SubmissionValueMap::new();
        values.insert("f1".to_string(), serde_json::json!("Alice"));
        let payload = SubmissionPayload {
            values,
            submitted_at: "2024-05-01T12:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["submittedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["values"]["f1"], "Alice");
    }

    #[test]
    fn test_form_draft_fields_default_empty() {
        let draft: FormDraft =
            serde_json::from_str(r#"{"name": "Survey", "description": "Q3"}"#).unwrap();
        assert!(draft.fields.is_empty());
    }
}
