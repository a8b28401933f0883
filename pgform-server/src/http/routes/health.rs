//! Health check endpoint
//!
//! Never fails as a handler: database errors become `{"ok": false}` with 500.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health - run `SELECT 1` on a borrowed connection
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    ok: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_body_has_no_error_key() {
        let body = serde_json::to_value(HealthResponse {
            ok: true,
            error: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn unhealthy_body_carries_error() {
        let body = serde_json::to_value(HealthResponse {
            ok: false,
            error: Some("connection refused".into()),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "error": "connection refused" })
        );
    }
}
