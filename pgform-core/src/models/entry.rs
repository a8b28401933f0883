//! Submitted form entry

use serde::{Deserialize, Serialize};

/// One row destined for the `entries` table.
///
/// Values are taken verbatim from the request body. No trimming, length or
/// format checks; an empty string is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewEntry {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
