//! HTTP server layer
//!
//! Axum routers with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::SubmittedFields;
pub use server::{
    build_model_router, build_sql_router, run_model_server, run_sql_server, AppState,
    ModelState, ServerConfig, ServerError,
};
