//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources replace earlier ones key by key; tables are merged, not
//! replaced wholesale, so a workspace file may override a single field.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("defaults.page_unit", "mm")?
        .set_default("defaults.grid_type", "lines")?
        .set_default("output.file_name", crate::export::DEFAULT_FILE_NAME)?
        .set_default("logging.level", "warn")
}
