//! Settings in, SVG out.

use crate::export::SvgDocument;
use crate::geometry::Layout;
use crate::markup::SvgMarkup;
use crate::settings::Settings;
use tracing::debug;

/// Render `settings` as a complete SVG document.
///
/// Total for every input: non-finite numbers are treated as zero and
/// degenerate geometry produces degenerate (but well-formed) output.
/// Identical settings always produce byte-identical output.
pub fn generate(settings: &Settings) -> String {
    let settings = settings.sanitized();
    let layout = Layout::compute(&settings);
    let device = layout.to_device();

    let (vertical, horizontal) = layout.line_counts();
    debug!(
        grid_type = %settings.grid_type,
        vertical,
        horizontal,
        dots = layout.dot_count(),
        origin_x = layout.rectangle.x,
        origin_y = layout.rectangle.y,
        "Generated grid layout"
    );

    SvgMarkup::new(settings.page_size_mm(), &device).to_string()
}

/// [`generate`], wrapped for delivery as a file named `file_name`.
pub fn generate_document(settings: &Settings, file_name: impl Into<String>) -> SvgDocument {
    SvgDocument::new(file_name, generate(settings))
}
