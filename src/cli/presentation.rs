//! CLI presentation: text and json formatters per command family.

mod generate;
mod presets;
mod summary;

pub use generate::format_generate_result;
pub use presets::{format_presets_json, format_presets_text};
pub use summary::{format_summary_json, format_summary_text};
