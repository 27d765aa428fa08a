//! Error types for Strongbox core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading, or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The config could not be serialized for saving.
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// One or more settings are unusable; messages are joined with `; `.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// No home directory and no `STRONGBOX_HOME` override.
    #[error("Could not determine home directory; set STRONGBOX_HOME")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON5 parse error: {0}")]
    Json5(String),
}
