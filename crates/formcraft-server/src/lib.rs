//! # formcraft-server
//!
//! The HTTP persistence gateway: an axum service exposing form CRUD and
//! submission endpoints over a [`FormStore`]. Wire shapes and status
//! conventions match the gateway contract consumed by the builder sessions
//! (200/201 success, 400 malformed input, 404 unknown id).

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use formcraft_core::{FormcraftError, FormcraftResult, Settings};
use formcraft_store::FormStore;

/// Builds the API router over a shared store.
pub fn router(store: Arc<FormStore>, settings: &Settings) -> Router {
    let mut router = Router::new()
        .route(
            "/api/forms",
            get(handlers::list_forms).post(handlers::create_form),
        )
        .route(
            "/api/forms/{id}",
            get(handlers::get_form)
                .put(handlers::update_form)
                .delete(handlers::delete_form),
        )
        .route("/api/forms/{id}/submit", post(handlers::submit_form))
        .route("/api/forms/{id}/submissions", get(handlers::list_submissions))
        .with_state(store);

    if settings.cors_allow_any_origin {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

/// Opens the store, seeds it if configured, and serves the API until the
/// process is stopped.
pub async fn run(settings: Settings) -> FormcraftResult<()> {
    let store = Arc::new(FormStore::open(&settings.db_path)?);
    if settings.seed_sample_data {
        store.seed_sample_data()?;
    }

    let app = router(store, &settings);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .map_err(|e| {
            FormcraftError::Configuration(format!("Failed to bind to {}: {e}", settings.bind_addr))
        })?;

    tracing::info!("API server running at http://{}/", settings.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| FormcraftError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
