//! Test support: an in-memory [`FormGateway`] double.
//!
//! Used by this crate's own tests and available to downstream crates that
//! want to exercise session logic without a store or server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use formcraft_core::{FormcraftError, FormcraftResult};
use formcraft_fields::gateway::{FormDraft, FormGateway, SubmissionPayload};
use formcraft_fields::model::{FormData, FormSummary, Submission};

/// An in-memory gateway with deterministic ids and an optional failure
/// mode for exercising degraded error paths.
#[derive(Debug, Default)]
pub struct MockGateway {
    forms: Mutex<HashMap<String, FormData>>,
    submissions: Mutex<HashMap<String, Vec<Submission>>>,
    counter: AtomicU64,
    fail_all: bool,
}

impl MockGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a transport error.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    fn check_up(&self) -> FormcraftResult<()> {
        if self.fail_all {
            return Err(FormcraftError::Transport("gateway unreachable".to_string()));
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

#[async_trait]
impl FormGateway for MockGateway {
    async fn list_forms(&self) -> FormcraftResult<Vec<FormSummary>> {
        self.check_up()?;
        let forms = self.forms.lock().expect("mock gateway poisoned");
        Ok(forms
            .values()
            .map(|form| FormSummary {
                id: form.id.clone().unwrap_or_default(),
                name: form.name.clone(),
                description: form.description.clone(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                field_count: form.fields.len(),
            })
            .collect())
    }

    async fn get_form(&self, id: &str) -> FormcraftResult<FormData> {
        self.check_up()?;
        let forms = self.forms.lock().expect("mock gateway poisoned");
        forms
            .get(id)
            .cloned()
            .ok_or_else(|| FormcraftError::NotFound(format!("form {id}")))
    }

    async fn create_form(&self, draft: FormDraft) -> FormcraftResult<FormData> {
        self.check_up()?;
        let id = self.next_id("form");
        let form = FormData {
            id: Some(id.clone()),
            name: draft.name,
            description: draft.description,
            fields: draft.fields,
        };
        self.forms
            .lock()
            .expect("mock gateway poisoned")
            .insert(id, form.clone());
        Ok(form)
    }

    async fn update_form(&self, id: &str, form: &FormData) -> FormcraftResult<FormData> {
        self.check_up()?;
        let mut forms = self.forms.lock().expect("mock gateway poisoned");
        if !forms.contains_key(id) {
            return Err(FormcraftError::NotFound(format!("form {id}")));
        }
        let mut stored = form.clone();
        stored.id = Some(id.to_string());
        forms.insert(id.to_string(), stored.clone());
        Ok(stored)
    }

    async fn delete_form(&self, id: &str) -> FormcraftResult<()> {
        self.check_up()?;
        let mut forms = self.forms.lock().expect("mock gateway poisoned");
        if forms.remove(id).is_none() {
            return Err(FormcraftError::NotFound(format!("form {id}")));
        }
        self.submissions
            .lock()
            .expect("mock gateway poisoned")
            .remove(id);
        Ok(())
    }

    async fn submit_form(
        &self,
        id: &str,
        payload: SubmissionPayload,
    ) -> FormcraftResult<Submission> {
        self.check_up()?;
        {
            let forms = self.forms.lock().expect("mock gateway poisoned");
            if !forms.contains_key(id) {
                return Err(FormcraftError::NotFound(format!("form {id}")));
            }
        }
        let submission = Submission {
            id: self.next_id("submission"),
            form_id: id.to_string(),
            values: payload.values,
            submitted_at: payload.submitted_at,
        };
        self.submissions
            .lock()
            .expect("mock gateway poisoned")
            .entry(id.to_string())
            .or_default()
            .push(submission.clone());
        Ok(submission)
    }

    async fn list_submissions(&self, id: &str) -> FormcraftResult<Vec<Submission>> {
        self.check_up()?;
        {
            let forms = self.forms.lock().expect("mock gateway poisoned");
            if !forms.contains_key(id) {
                return Err(FormcraftError::NotFound(format!("form {id}")));
            }
        }
        let submissions = self.submissions.lock().expect("mock gateway poisoned");
        Ok(submissions.get(id).cloned().unwrap_or_default())
    }
}
