//! pgform-core: shared building blocks for the pgform services
//!
//! - `config`: startup configuration for the SQL and model variants
//! - `error`: configuration error types
//! - `form`: normalization of JSON/form request bodies into string fields
//! - `models`: domain models and validation errors

pub mod config;
pub mod error;
pub mod form;
pub mod models;

pub use config::{
    default_bind_addr, ModelAppConfig, SqlAppConfig, DATABASE_URL_ENV, DEFAULT_CONFIG_FILE,
    DEFAULT_DB_TIMEOUT_SECS,
};
pub use error::{ConfigError, ConfigResult};
pub use form::{FormFields, REQUIRED_FIELDS};
pub use models::{NewEntry, NewUser, ValidationError, USER_FIELD_MAX_LEN};
