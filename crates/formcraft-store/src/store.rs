//! The form record store.
//!
//! [`FormStore`] is an explicit store object constructed once at process
//! start and passed by reference to request handlers; there is no ambient
//! global state. Records live in memory behind an `RwLock` and every
//! mutation is written through to a pretty-printed JSON file, so the db
//! file stays inspectable and survives restarts.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use formcraft_core::{FormcraftError, FormcraftResult};
use formcraft_fields::gateway::{FormDraft, SubmissionPayload};
use formcraft_fields::model::{
    FieldKind, FormData, FormField, FormSummary, Submission, ValidationRules,
};

/// A form record as persisted, with its submissions embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredForm {
    /// Record id assigned at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// The form definition's fields.
    #[serde(default)]
    pub fields: Vec<FormField>,
    /// Submissions recorded against this form.
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl StoredForm {
    /// The public definition view of this record.
    pub fn to_form_data(&self) -> FormData {
        FormData {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            fields: self.fields.clone(),
        }
    }

    /// The listing row for this record.
    pub fn to_summary(&self) -> FormSummary {
        FormSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at.clone(),
            field_count: self.fields.len(),
        }
    }
}

/// The on-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    forms: Vec<StoredForm>,
}

/// The JSON-file-backed record store.
pub struct FormStore {
    path: PathBuf,
    data: RwLock<StoreData>,
}

impl FormStore {
    /// Opens the store at `path`, loading existing records if the file
    /// exists and starting empty otherwise.
    pub fn open(path: impl Into<PathBuf>) -> FormcraftResult<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                FormcraftError::Storage(format!("corrupt store file {}: {e}", path.display()))
            })?
        } else {
            StoreData::default()
        };
        tracing::info!(path = %path.display(), forms = data.forms.len(), "store opened");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Whether the store holds no forms.
    pub fn is_empty(&self) -> bool {
        self.read().forms.is_empty()
    }

    /// Seeds the store with two sample forms (a contact form and a survey)
    /// if it is empty. Useful for first runs against a fresh db file.
    pub fn seed_sample_data(&self) -> FormcraftResult<()> {
        if !self.is_empty() {
            return Ok(());
        }
        let now = Utc::now().to_rfc3339();
        {
            let mut data = self.write();
            data.forms.push(sample_contact_form(&now));
            data.forms.push(sample_survey_form(&now));
        }
        self.persist()?;
        tracing::info!("seeded sample forms");
        Ok(())
    }

    /// Lists all forms as summaries, in creation order.
    pub fn list_forms(&self) -> Vec<FormSummary> {
        self.read().forms.iter().map(StoredForm::to_summary).collect()
    }

    /// Fetches one form definition.
    pub fn get_form(&self, id: &str) -> FormcraftResult<FormData> {
        self.read()
            .forms
            .iter()
            .find(|f| f.id == id)
            .map(StoredForm::to_form_data)
            .ok_or_else(|| FormcraftError::NotFound(format!("form {id}")))
    }

    /// Creates a new form record, assigning id and creation timestamp.
    pub fn create_form(&self, draft: FormDraft) -> FormcraftResult<FormData> {
        let record = StoredForm {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            created_at: Utc::now().to_rfc3339(),
            fields: draft.fields,
            submissions: Vec::new(),
        };
        let form = record.to_form_data();
        self.write().forms.push(record);
        self.persist()?;
        Ok(form)
    }

    /// Replaces a stored form's definition, keeping its creation timestamp
    /// and recorded submissions.
    pub fn update_form(&self, id: &str, form: &FormData) -> FormcraftResult<FormData> {
        let updated = {
            let mut data = self.write();
            let record = data
                .forms
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| FormcraftError::NotFound(format!("form {id}")))?;
            record.name = form.name.clone();
            record.description = form.description.clone();
            record.fields = form.fields.clone();
            record.to_form_data()
        };
        self.persist()?;
        Ok(updated)
    }

    /// Deletes a form and its submissions.
    pub fn delete_form(&self, id: &str) -> FormcraftResult<()> {
        {
            let mut data = self.write();
            let before = data.forms.len();
            data.forms.retain(|f| f.id != id);
            if data.forms.len() == before {
                return Err(FormcraftError::NotFound(format!("form {id}")));
            }
        }
        self.persist()
    }

    /// Records a submission against a form.
    pub fn submit_form(
        &self,
        id: &str,
        payload: SubmissionPayload,
    ) -> FormcraftResult<Submission> {
        let submission = {
            let mut data = self.write();
            let record = data
                .forms
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| FormcraftError::NotFound(format!("form {id}")))?;
            let submission = Submission {
                id: Uuid::new_v4().to_string(),
                form_id: id.to_string(),
                values: payload.values,
                submitted_at: payload.submitted_at,
            };
            record.submissions.push(submission.clone());
            submission
        };
        self.persist()?;
        Ok(submission)
    }

    /// Lists the submissions recorded against a form.
    pub fn list_submissions(&self, id: &str) -> FormcraftResult<Vec<Submission>> {
        self.read()
            .forms
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.submissions.clone())
            .ok_or_else(|| FormcraftError::NotFound(format!("form {id}")))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Writes the whole document back to the db file.
    fn persist(&self) -> FormcraftResult<()> {
        let raw = {
            let data = self.read();
            serde_json::to_string_pretty(&*data)?
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStore")
            .field("path", &self.path)
            .field("forms", &self.read().forms.len())
            .finish()
    }
}

fn sample_contact_form(now: &str) -> StoredForm {
    StoredForm {
        id: Uuid::new_v4().to_string(),
        name: "Contact Form".to_string(),
        description: "Get in touch with us".to_string(),
        created_at: now.to_string(),
        fields: vec![
            FormField {
                id: "field-1".to_string(),
                kind: FieldKind::Text,
                label: "Full Name".to_string(),
                placeholder: Some("Enter your full name".to_string()),
                required: true,
                options: Vec::new(),
                validation: None,
            },
            FormField {
                id: "field-2".to_string(),
                kind: FieldKind::Text,
                label: "Email Address".to_string(),
                placeholder: Some("Enter your email".to_string()),
                required: true,
                options: Vec::new(),
                validation: Some(ValidationRules {
                    min_length: None,
                    max_length: None,
                    pattern: Some(r"^[^@\s]+@[^@\s]+\.[^@\s]+$".to_string()),
                }),
            },
            FormField {
                id: "field-3".to_string(),
                kind: FieldKind::Textarea,
                label: "Message".to_string(),
                placeholder: Some("Enter your message here...".to_string()),
                required: true,
                options: Vec::new(),
                validation: None,
            },
        ],
        submissions: Vec::new(),
    }
}

fn sample_survey_form(now: &str) -> StoredForm {
    StoredForm {
        id: Uuid::new_v4().to_string(),
        name: "Survey Form".to_string(),
        description: "Help us improve our services".to_string(),
        created_at: now.to_string(),
        fields: vec![
            FormField {
                id: "field-1".to_string(),
                kind: FieldKind::Select,
                label: "How did you hear about us?".to_string(),
                placeholder: None,
                required: true,
                options: vec![
                    "Google Search".to_string(),
                    "Social Media".to_string(),
                    "Friend Referral".to_string(),
                    "Advertisement".to_string(),
                ],
                validation: None,
            },
            FormField {
                id: "field-2".to_string(),
                kind: FieldKind::Radio,
                label: "Rate our service".to_string(),
                placeholder: None,
                required: true,
                options: vec![
                    "Excellent".to_string(),
                    "Good".to_string(),
                    "Average".to_string(),
                    "Poor".to_string(),
                ],
                validation: None,
            },
            FormField {
                id: "field-3".to_string(),
                kind: FieldKind::Checkbox,
                label: "Subscribe to newsletter".to_string(),
                placeholder: None,
                required: false,
                options: Vec::new(),
                validation: None,
            },
        ],
        submissions: Vec::new(),
    }
}
