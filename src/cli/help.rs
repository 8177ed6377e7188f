//! CLI command-name contract for log fields.

use crate::cli::parse::Commands;

/// Command name string for log records (e.g. "generate", "presets").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Inspect { .. } => "inspect",
        Commands::Presets { .. } => "presets",
    }
}
