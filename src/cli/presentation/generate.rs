//! Generate command presentation.

use crate::settings::SettingsWarning;
use owo_colors::OwoColorize;
use std::path::Path;

/// One confirmation line, preceded by any settings warnings.
pub fn format_generate_result(path: &Path, bytes: usize, warnings: &[SettingsWarning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!("{} {}\n", "warning:".yellow().bold(), warning));
    }
    out.push_str(&format!(
        "Wrote {} ({} bytes, image/svg+xml)",
        path.display(),
        bytes
    ));
    out
}
