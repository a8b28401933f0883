//! Root endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Plain-text banner served by the model app
pub const MODEL_BANNER: &str = "Connected to AWS RDS PostgreSQL!";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET / (SQL app)
async fn sql_index() -> Json<MessageResponse> {
    Json(MessageResponse { message: "OK" })
}

/// GET / (model app)
async fn model_index() -> &'static str {
    MODEL_BANNER
}

/// Root route for the SQL app
pub fn sql_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(sql_index))
}

/// Root route for the model app
pub fn model_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(model_index))
}
