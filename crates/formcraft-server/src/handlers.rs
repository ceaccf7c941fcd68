//! Request handlers for the form API.
//!
//! Every handler works against a shared [`FormStore`] reference. Errors
//! serialize as `{"error": "<message>"}` with the status code from
//! [`FormcraftError::status_code`]; blocked submissions additionally carry
//! the per-field message map.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use formcraft_core::FormcraftError;
use formcraft_fields::gateway::{FormDraft, SubmissionPayload};
use formcraft_fields::model::{FormData, FormSummary, Submission};
use formcraft_fields::validation::validate_form;
use formcraft_store::FormStore;

/// Error wrapper carrying a [`FormcraftError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub FormcraftError);

impl From<FormcraftError> for ApiError {
    fn from(err: FormcraftError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self.0 {
            FormcraftError::Validation(errors) => json!({
                "error": "Validation failed",
                "fields": errors.fields,
            }),
            other => json!({ "error": other.to_string() }),
        };
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "request failed");
        }
        (status, Json(body)).into_response()
    }
}

/// `GET /api/forms`
pub async fn list_forms(State(store): State<Arc<FormStore>>) -> Json<Vec<FormSummary>> {
    Json(store.list_forms())
}

/// `POST /api/forms`
pub async fn create_form(
    State(store): State<Arc<FormStore>>,
    Json(draft): Json<FormDraft>,
) -> Result<(StatusCode, Json<FormData>), ApiError> {
    let form = store.create_form(draft)?;
    tracing::info!(id = ?form.id, "form created");
    Ok((StatusCode::CREATED, Json(form)))
}

/// `GET /api/forms/{id}`
pub async fn get_form(
    State(store): State<Arc<FormStore>>,
    Path(id): Path<String>,
) -> Result<Json<FormData>, ApiError> {
    Ok(Json(store.get_form(&id)?))
}

/// `PUT /api/forms/{id}`
pub async fn update_form(
    State(store): State<Arc<FormStore>>,
    Path(id): Path<String>,
    Json(form): Json<FormData>,
) -> Result<Json<FormData>, ApiError> {
    if !form.has_unique_ids() {
        return Err(FormcraftError::BadRequest("duplicate field ids".to_string()).into());
    }
    let updated = store.update_form(&id, &form)?;
    tracing::info!(id, "form updated");
    Ok(Json(updated))
}

/// `DELETE /api/forms/{id}`
pub async fn delete_form(
    State(store): State<Arc<FormStore>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.delete_form(&id)?;
    tracing::info!(id, "form deleted");
    Ok(Json(json!({ "deleted": true })))
}

/// `POST /api/forms/{id}/submit`
///
/// The stored definition is re-validated against the payload so a client
/// that skipped the respondent-side engine cannot record an invalid
/// submission.
pub async fn submit_form(
    State(store): State<Arc<FormStore>>,
    Path(id): Path<String>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<(StatusCode, Json<Submission>), ApiError> {
    let form = store.get_form(&id)?;
    let failures = validate_form(&form, &payload.values);
    if !failures.is_empty() {
        return Err(FormcraftError::Validation(formcraft_core::ValidationErrors {
            fields: failures,
        })
        .into());
    }
    let submission = store.submit_form(&id, payload)?;
    tracing::info!(form_id = id, submission_id = %submission.id, "submission recorded");
    Ok((StatusCode::CREATED, Json(submission)))
}

/// `GET /api/forms/{id}/submissions`
pub async fn list_submissions(
    State(store): State<Arc<FormStore>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    Ok(Json(store.list_submissions(&id)?))
}
