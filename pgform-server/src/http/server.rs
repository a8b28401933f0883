//! Axum server setup
//!
//! Both apps share:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pgform_core::default_bind_addr;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::EntryStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Shared state for the SQL app
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }
}

/// Shared state for the model app: the engine handle for the `users` schema
#[derive(Clone)]
pub struct ModelState {
    pub pool: PgPool,
}

/// Router for the SQL app: `/`, `/health`, `/api/submit`
pub fn build_sql_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::index::sql_router())
        .merge(routes::health::router())
        .merge(routes::submit::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the model app: `/` only
pub fn build_model_router(state: ModelState) -> Router {
    Router::new()
        .merge(routes::index::model_router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the SQL app until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url, Duration::from_secs(5))?;
/// let state = AppState::new(Arc::new(PgEntryStore::new(pool)));
/// run_sql_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_sql_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    serve(build_sql_router(state), config.bind_addr).await
}

/// Run the model app until a shutdown signal arrives.
pub async fn run_model_server(state: ModelState, config: ServerConfig) -> Result<(), ServerError> {
    serve(build_model_router(state), config.bind_addr).await
}

async fn serve(app: Router, bind_addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.bind_addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn model_root_returns_banner() {
        let pool = create_pool(
            "postgres://pgform@127.0.0.1:1/pgform",
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        let app = build_model_router(ModelState { pool });

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], routes::index::MODEL_BANNER.as_bytes());
    }

    #[tokio::test]
    async fn model_app_has_no_health_route() {
        let pool = create_pool(
            "postgres://pgform@127.0.0.1:1/pgform",
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        let app = build_model_router(ModelState { pool });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
