//! CLI domain: parse, route, help, output, and presentation only.
//! Single route table dispatches to the generator and export services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, SettingsArgs};
pub use presentation::{
    format_generate_result, format_presets_json, format_presets_text, format_summary_json,
    format_summary_text,
};
pub use route::RunContext;
