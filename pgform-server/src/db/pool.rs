//! Database connection pool management
//!
//! Pools are created lazily: the connection string is parsed at startup, but
//! no connection is opened until the first request needs one. An unreachable
//! database therefore surfaces through `/health`, not as a startup failure.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a lazy PostgreSQL pool that gives up acquiring a connection after
/// `acquire_timeout`. Other limits are the driver's defaults.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/app", Duration::from_secs(5))?;
/// ```
pub fn create_pool(database_url: &str, acquire_timeout: Duration) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn malformed_url_is_rejected() {
        assert!(create_pool("not a url", TIMEOUT).is_err());
    }

    #[tokio::test]
    async fn lazy_pool_opens_no_connections() {
        let pool = create_pool("postgres://pgform@127.0.0.1:1/pgform", TIMEOUT).unwrap();
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.options().get_acquire_timeout(), TIMEOUT);
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p pgform-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, Duration::from_secs(5)).expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
