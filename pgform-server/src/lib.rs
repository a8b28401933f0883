//! pgform-server: HTTP services over PostgreSQL
//!
//! Two independent routers share the database layer:
//! - SQL app: `GET /`, `GET /health`, `POST /api/submit`
//! - model app: `GET /` only, with the `users` schema declared in `db::users`

pub mod db;
pub mod http;

pub use db::{create_pool, DbError, EntryStore, PgEntryStore};
pub use http::{run_model_server, run_sql_server, ApiError, ServerConfig, ServerError};
