//! User model for the model variant's `users` table
//!
//! Columns: `id` (serial primary key), `name` (varchar 100),
//! `email` (varchar 100, unique).

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length of `users.name` and `users.email`
pub const USER_FIELD_MAX_LEN: usize = 100;

/// Validated input for a new `users` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Create a new user, enforcing the column length limits.
    ///
    /// Lengths are counted in characters, matching `VARCHAR(100)`.
    /// Email uniqueness is left to the table's unique constraint.
    ///
    /// # Example
    /// ```
    /// use pgform_core::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com").is_ok());
    /// assert!(NewUser::new("x".repeat(101), "ada@example.com").is_err());
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();

        check_len("name", &name)?;
        check_len("email", &email)?;

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn check_len(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > USER_FIELD_MAX_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: USER_FIELD_MAX_LEN,
        });
    }
    Ok(())
}
