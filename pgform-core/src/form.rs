//! Request-body normalization
//!
//! JSON objects, url-encoded and multipart forms are all reduced to one ordered map of
//! string keys to string values before any validation runs.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{NewEntry, ValidationError};

/// Keys a submit body must contain
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Normalized request fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Normalize a parsed JSON document.
    ///
    /// Only objects carry fields. Strings are kept verbatim, any other value
    /// is rendered as its JSON text (`42`, `true`, `null`, `[1,2]`).
    pub fn from_json_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        map.into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect()
    }

    /// Parse and normalize a raw JSON body. Malformed JSON yields no fields.
    pub fn from_json_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_json_value(value),
            Err(e) => {
                tracing::debug!(error = %e, "unparseable JSON body");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First required key not present, if any
    pub fn first_missing(&self) -> Option<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .find(|field| !self.contains(field))
    }

    /// Consume into a `NewEntry`, checking key presence only.
    pub fn into_entry(mut self) -> Result<NewEntry, ValidationError> {
        if let Some(field) = self.first_missing() {
            return Err(ValidationError::Missing { field });
        }

        let mut take = |field: &'static str| {
            self.0
                .remove(field)
                .ok_or(ValidationError::Missing { field })
        };

        Ok(NewEntry {
            name: take("name")?,
            email: take("email")?,
            message: take("message")?,
        })
    }
}

/// Repeated keys: the last occurrence wins.
impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
