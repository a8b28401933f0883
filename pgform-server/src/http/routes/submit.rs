//! Form submission endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::SubmittedFields;
use crate::http::server::AppState;

/// Submit success response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
}

/// POST /api/submit - insert one entry from a JSON or form body
///
/// Only key presence is checked; the store is untouched when any of
/// `name`, `email`, `message` is absent.
async fn submit(
    State(state): State<AppState>,
    SubmittedFields(fields): SubmittedFields,
) -> Result<Json<SubmitResponse>, ApiError> {
    let entry = fields.into_entry()?;
    state.store.insert_entry(&entry).await?;

    Ok(Json(SubmitResponse { status: "ok" }))
}

/// Submit routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/submit", post(submit))
}
