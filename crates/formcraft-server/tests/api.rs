//! Integration tests for the form API.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`,
//! covering the CRUD contract, the status conventions (200/201/400/404),
//! and server-side submission validation.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use formcraft_core::Settings;
use formcraft_store::FormStore;

fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FormStore::open(dir.path().join("db.json")).unwrap());
    let app = formcraft_server::router(store, &Settings::default());
    (dir, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn contact_draft() -> Value {
    json!({
        "name": "Contact Form",
        "description": "Get in touch with us",
        "fields": [
            {
                "id": "name-field",
                "type": "text",
                "label": "Full Name",
                "placeholder": "Enter your full name",
                "required": true
            },
            {
                "id": "newsletter",
                "type": "checkbox",
                "label": "Subscribe to newsletter",
                "required": false
            }
        ]
    })
}

#[tokio::test]
async fn test_list_forms_empty() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/forms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_get_form() {
    let (_dir, app) = test_app();
    let (status, created) = send(&app, Method::POST, "/api/forms", Some(contact_draft())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/forms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Contact Form");
    assert_eq!(fetched["fields"][0]["type"], "text");
    // Empty options are omitted from the wire shape
    assert!(fetched["fields"][1].get("options").is_none());

    let (status, listing) = send(&app, Method::GET, "/api/forms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing[0]["fieldCount"], 2);
    assert!(listing[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_get_unknown_form_is_404() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/forms/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("ghost"));
}

#[tokio::test]
async fn test_create_with_malformed_body_is_400() {
    let (_dir, app) = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/forms")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_form() {
    let (_dir, app) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/forms", Some(contact_draft())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut updated = created.clone();
    updated["name"] = json!("Renamed Form");
    let (status, body) = send(&app, Method::PUT, &format!("/api/forms/{id}"), Some(updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed Form");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/forms/ghost",
        Some(contact_draft()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_duplicate_field_ids_is_400() {
    let (_dir, app) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/forms", Some(contact_draft())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let broken = json!({
        "id": id,
        "name": "Broken",
        "description": "",
        "fields": [
            {"id": "dup", "type": "text", "label": "A", "required": false},
            {"id": "dup", "type": "text", "label": "B", "required": false}
        ]
    });
    let (status, body) = send(&app, Method::PUT, &format!("/api/forms/{id}"), Some(broken)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("duplicate"));
}

#[tokio::test]
async fn test_delete_form() {
    let (_dir, app) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/forms", Some(contact_draft())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/forms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/forms/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_valid_and_invalid() {
    let (_dir, app) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/forms", Some(contact_draft())).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Missing required field: blocked with the per-field message map.
    let empty = json!({ "values": {}, "submittedAt": "2024-05-01T12:00:00Z" });
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/forms/{id}/submit"),
        Some(empty),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["name-field"], "Full Name is required");

    // Valid payload is recorded.
    let valid = json!({
        "values": { "name-field": "Alice", "newsletter": true },
        "submittedAt": "2024-05-01T12:00:00Z"
    });
    let (status, submission) = send(
        &app,
        Method::POST,
        &format!("/api/forms/{id}/submit"),
        Some(valid),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submission["formId"], id.as_str());
    assert_eq!(submission["values"]["name-field"], "Alice");
    assert_eq!(submission["submittedAt"], "2024-05-01T12:00:00Z");

    let (status, listed) = send(
        &app,
        Method::GET,
        &format!("/api/forms/{id}/submissions"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_to_unknown_form_is_404() {
    let (_dir, app) = test_app();
    let payload = json!({ "values": {}, "submittedAt": "2024-05-01T12:00:00Z" });
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/forms/ghost/submit",
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/forms/ghost/submissions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
