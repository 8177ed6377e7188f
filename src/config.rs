//! Configuration System
//!
//! Layered configuration for default page settings, output location and
//! logging. Sources, lowest precedence first: built-in defaults, the global
//! user file, the workspace `gridpaper.toml`, `config/{GRIDPAPER_ENV}.toml`,
//! then `GRIDPAPER__*` environment variables. CLI flags are applied on top by
//! the caller.

use crate::export::DEFAULT_FILE_NAME;
use crate::logging::{LoggingConfig, LOG_FORMATS, LOG_LEVELS, LOG_OUTPUTS};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridpaperConfig {
    /// Settings used when a CLI flag is not given
    #[serde(default)]
    pub defaults: Settings,

    /// Where generated files go
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output location for generated documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated files; relative paths resolve against the workspace
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File name used when `--output` is not given
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Logging(String),
    Output(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GridpaperConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let logging = &self.logging;
        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown level '{}'",
                logging.level
            )));
        }
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}'",
                logging.format
            )));
        }
        if !LOG_OUTPUTS.contains(&logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown output '{}'",
                logging.output
            )));
        }

        if self.output.file_name.trim().is_empty() {
            errors.push(ValidationError::Output(
                "file_name cannot be empty".to_string(),
            ));
        } else if self.output.file_name.contains(['/', '\\']) {
            errors.push(ValidationError::Output(format!(
                "file_name '{}' must not contain path separators; use output.directory",
                self.output.file_name
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
