//! In-process gateway over the store.
//!
//! Lets designer and respondent sessions run directly against a
//! [`FormStore`] with no HTTP hop, which is how integration tests and
//! embedded deployments consume persistence.

use async_trait::async_trait;

use formcraft_core::FormcraftResult;
use formcraft_fields::gateway::{FormDraft, FormGateway, SubmissionPayload};
use formcraft_fields::model::{FormData, FormSummary, Submission};

use crate::store::FormStore;

#[async_trait]
impl FormGateway for FormStore {
    async fn list_forms(&self) -> FormcraftResult<Vec<FormSummary>> {
        Ok(Self::list_forms(self))
    }

    async fn get_form(&self, id: &str) -> FormcraftResult<FormData> {
        Self::get_form(self, id)
    }

    async fn create_form(&self, draft: FormDraft) -> FormcraftResult<FormData> {
        Self::create_form(self, draft)
    }

    async fn update_form(&self, id: &str, form: &FormData) -> FormcraftResult<FormData> {
        Self::update_form(self, id, form)
    }

    async fn delete_form(&self, id: &str) -> FormcraftResult<()> {
        Self::delete_form(self, id)
    }

    async fn submit_form(
        &self,
        id: &str,
        payload: SubmissionPayload,
    ) -> FormcraftResult<Submission> {
        Self::submit_form(self, id, payload)
    }

    async fn list_submissions(&self, id: &str) -> FormcraftResult<Vec<Submission>> {
        Self::list_submissions(self, id)
    }
}
