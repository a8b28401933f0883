/// Structured error types for pgform startup configuration.
///
/// Library code returns `ConfigError` so the binary can attach context with
/// `anyhow` and exit before binding a listener.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is absent or blank
    #[error("{name} is not set")]
    MissingEnv { name: &'static str },

    /// Config file does not exist
    #[error("Config file not found: {path:?}")]
    NotFound { path: PathBuf },

    /// Config file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Parsed config failed a semantic check
    #[error("Configuration error: {reason}")]
    Invalid { reason: String },
}

/// Result alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
