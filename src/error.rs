//! Error types for gridpaper.
//!
//! The generator itself is total and never fails; these cover configuration,
//! argument handling and writing files.

use std::path::PathBuf;
use thiserror::Error;

/// File delivery errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to write an empty document")]
    EmptyDocument,
}

/// Errors surfaced by the CLI and configuration layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    UnknownPreset(String),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
