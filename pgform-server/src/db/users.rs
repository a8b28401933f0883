//! User schema for the model app
//!
//! Mirrors the `users` table: `id` serial primary key, `name` and `email`
//! as `VARCHAR(100)`, `email` unique. No route reads or writes it; the table
//! is owned outside this service.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pgform_core::USER_FIELD_MAX_LEN;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Table backing this model
    pub const TABLE: &'static str = "users";

    /// Column names in declaration order
    pub const COLUMNS: [&'static str; 3] = ["id", "name", "email"];

    /// Maximum characters for `name` and `email`
    pub const MAX_FIELD_LEN: usize = USER_FIELD_MAX_LEN;
}
