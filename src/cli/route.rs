//! CLI route: single route table and run context. Dispatches to the generator and presentation.

use crate::config::{ConfigLoader, GridpaperConfig};
use crate::error::ApiError;
use crate::generator::generate_document;
use crate::summary::LayoutSummary;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_generate_result, format_presets_json, format_presets_text, format_summary_json,
    format_summary_text,
};

/// Runtime context for CLI execution: workspace root plus loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: GridpaperConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Err(errors) = config.validate() {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::ConfigError(joined));
        }

        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Build a context around an already-loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: GridpaperConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    /// Execute a command and return its textual output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Generate {
                settings,
                output,
                stdout,
            } => {
                let settings = settings.apply(self.config.defaults)?;
                let warnings = settings.validate();
                for warning in &warnings {
                    warn!(%warning, "Questionable settings");
                }

                let document = generate_document(&settings, self.config.output.file_name.clone());
                if *stdout {
                    // println! in the binary restores the final newline
                    return Ok(document.content().trim_end().to_string());
                }

                let path = match output {
                    Some(path) => path.clone(),
                    None => self.default_output_path(document.file_name()),
                };
                document.write_to(&path)?;
                Ok(format_generate_result(
                    &path,
                    document.as_bytes().len(),
                    &warnings,
                ))
            }
            Commands::Inspect { settings, format } => {
                let settings = settings.apply(self.config.defaults)?;
                let summary = LayoutSummary::from_settings(&settings);
                match format.as_str() {
                    "text" => Ok(format_summary_text(&summary)),
                    "json" => format_summary_json(&summary),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Presets { format } => match format.as_str() {
                "text" => Ok(format_presets_text()),
                "json" => format_presets_json(),
                other => Err(invalid_format(other)),
            },
        }
    }

    fn default_output_path(&self, file_name: &str) -> PathBuf {
        let dir = match self.config.output.directory {
            Some(ref dir) if dir.is_absolute() => dir.clone(),
            Some(ref dir) => self.workspace_root.join(dir),
            None => self.workspace_root.clone(),
        };
        dir.join(file_name)
    }
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "Invalid format: {}. Must be 'text' or 'json'",
        format
    ))
}
