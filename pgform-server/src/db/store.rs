//! Entry storage
//!
//! `EntryStore` is the seam between handlers and PostgreSQL:
//! - ping: borrow a connection, run `SELECT 1`, give it back
//! - insert_entry: one parameterized INSERT inside a transaction

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgConnection;
use sqlx::{Connection, PgPool, Postgres, Transaction};

use pgform_core::NewEntry;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Raw driver error; its text is what clients see on a 500
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations used by the SQL app's handlers
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Confirm the database is reachable and answering queries
    async fn ping(&self) -> Result<(), DbError>;

    /// Persist one submitted entry
    async fn insert_entry(&self, entry: &NewEntry) -> Result<(), DbError>;
}

const PING_SQL: &str = "SELECT 1";

const INSERT_ENTRY_SQL: &str = "INSERT INTO entries (name, email, message) VALUES ($1, $2, $3)";

/// PostgreSQL-backed store over the shared pool
#[derive(Debug, Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        match self.pool.acquire().await {
            Ok(conn) => Ok(conn),
            Err(e) => Err(self.connect_failure(e).await),
        }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, DbError> {
        match self.pool.begin().await {
            Ok(tx) => Ok(tx),
            Err(e) => Err(self.connect_failure(e).await),
        }
    }

    /// Replace a pool timeout with the connect error behind it.
    ///
    /// The pool retries failed connects until its acquire timeout and then
    /// only reports `PoolTimedOut`. One direct connect attempt, bounded by the
    /// same timeout, recovers the real cause (e.g. connection refused). If
    /// that attempt succeeds the pool was simply exhausted and the timeout
    /// stands.
    async fn connect_failure(&self, err: sqlx::Error) -> DbError {
        if !matches!(err, sqlx::Error::PoolTimedOut) {
            return err.into();
        }

        let options = self.pool.connect_options();
        let timeout = self.pool.options().get_acquire_timeout();

        match tokio::time::timeout(timeout, PgConnection::connect_with(&options)).await {
            Ok(Err(cause)) => {
                tracing::debug!(error = %cause, "pool timed out; direct connect failed");
                cause.into()
            }
            Ok(Ok(conn)) => {
                if let Err(e) = conn.close().await {
                    tracing::debug!(error = %e, "closing diagnostic connection failed");
                }
                err.into()
            }
            Err(_) => err.into(),
        }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn ping(&self) -> Result<(), DbError> {
        // Returned to the pool when `conn` drops, on success or error
        let mut conn = self.acquire().await?;
        sqlx::query(PING_SQL).execute(&mut *conn).await?;
        Ok(())
    }

    async fn insert_entry(&self, entry: &NewEntry) -> Result<(), DbError> {
        let mut tx = self.begin().await?;

        // An early return drops `tx` uncommitted, which rolls it back
        sqlx::query(INSERT_ENTRY_SQL)
            .bind(&entry.name)
            .bind(&entry.email)
            .bind(&entry.message)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!("entry inserted");
        Ok(())
    }
}
