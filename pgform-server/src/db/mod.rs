//! Database layer - connection pool, entry storage and the user schema
//!
//! - One pool per process, created at startup and cloned into handlers
//! - Each operation borrows a connection and returns it on drop
//! - Inserts run inside a transaction that rolls back when dropped uncommitted

pub mod pool;
pub mod store;
pub mod users;

pub use pool::create_pool;
pub use store::{DbError, EntryStore, PgEntryStore};
pub use users::User;
