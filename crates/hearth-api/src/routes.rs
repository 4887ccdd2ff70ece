//! Route wiring for the scoring service.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use hearth_data::{DataError, LookupTables};
use hearth_score::aggregate_zip;

use crate::schemas::{HealthResponse, ScoreRequest, ScoreResponse};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The read-only lookup tables, loaded once at startup.
    pub tables: Arc<LookupTables>,
}

/// Error wrapper that maps lookup failures onto HTTP statuses.
///
/// Only an unresolvable ZIP reaches here as not-found; "resolved but
/// no usable data" is a successful sentinel response, never an error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DataError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DataError::ZipNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Build the service router.
///
/// CORS is permissive: the API serves a public read-only dataset.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/score", post(score))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::current())
}

async fn score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    info!(zipcode = request.zipcode, "scoring request");
    let estimate = aggregate_zip(&state.tables, request.zipcode)?;
    Ok(Json(estimate.into()))
}
