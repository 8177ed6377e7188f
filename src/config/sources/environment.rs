//! Environment source: GRIDPAPER__SECTION__KEY=value
//! (e.g. GRIDPAPER__DEFAULTS__GRID_TYPE=dots).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("GRIDPAPER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
