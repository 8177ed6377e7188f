//! Gridpaper: printable grid and dot paper as physically-scaled SVG
//!
//! Page and rectangle sizes are physical (millimetres, centimetres or
//! inches). The generator centres a rectangle on the page, fills it with a
//! line or dot grid, and emits an SVG whose `width`/`height` carry the page
//! size in millimetres while all drawing happens in CSS pixels at 96 dpi.
//!
//! ```
//! use gridpaper::{generate, Settings};
//!
//! let svg = generate(&Settings::default());
//! assert!(svg.contains(r#"width="210mm""#));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod logging;
pub mod markup;
pub mod presets;
pub mod settings;
pub mod summary;
pub mod units;

pub use export::SvgDocument;
pub use generator::{generate, generate_document};
pub use geometry::Layout;
pub use settings::Settings;
pub use units::{GridType, PageUnit};
