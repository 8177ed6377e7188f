//! SVG serialization of a device-space [`Layout`].
//!
//! The root element declares its physical size in millimeters and its viewBox
//! in device pixels, so the file prints at true scale on any viewer.

use crate::geometry::{GridPrimitive, Layout};
use std::fmt::{self, Write};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const INK: &str = "#000000";

/// Format a coordinate: at most four decimals, trailing zeros dropped,
/// negative zero printed as `0`. Non-finite values print as `0`.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.4}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Displayable SVG document for a layout.
///
/// `page_mm` is the physical page size written to `width`/`height`;
/// `device` is the same layout already scaled by [`crate::units::PX_PER_MM`].
pub struct SvgMarkup<'a> {
    page_mm: (f64, f64),
    device: &'a Layout,
}

impl<'a> SvgMarkup<'a> {
    pub fn new(page_mm: (f64, f64), device: &'a Layout) -> Self {
        Self { page_mm, device }
    }

    fn write_style(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.device;
        writeln!(out, "  <style>")?;
        writeln!(
            out,
            "    .page-boundary {{ fill: none; stroke: none; stroke-width: 0; }}"
        )?;
        writeln!(
            out,
            "    .grid-line {{ fill: none; stroke: {}; stroke-width: {}; }}",
            INK,
            fmt_num(d.line_width)
        )?;
        writeln!(out, "    .grid-dot {{ fill: {}; stroke: none; }}", INK)?;
        writeln!(
            out,
            "    .rectangle {{ fill: none; stroke: {}; stroke-width: {}; }}",
            INK,
            fmt_num(d.border_width)
        )?;
        writeln!(out, "  </style>")
    }

    fn write_grid(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.device.primitives.is_empty() {
            return writeln!(out, r#"  <g class="grid"/>"#);
        }
        writeln!(out, r#"  <g class="grid">"#)?;
        for primitive in &self.device.primitives {
            match primitive {
                GridPrimitive::Line { from, to, .. } => writeln!(
                    out,
                    r#"    <line class="grid-line" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                    fmt_num(from.x),
                    fmt_num(from.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )?,
                GridPrimitive::Dot { center, radius } => writeln!(
                    out,
                    r#"    <circle class="grid-dot" cx="{}" cy="{}" r="{}"/>"#,
                    fmt_num(center.x),
                    fmt_num(center.y),
                    fmt_num(*radius)
                )?,
            }
        }
        writeln!(out, "  </g>")
    }
}

impl fmt::Display for SvgMarkup<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.device;
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        )?;
        writeln!(
            out,
            r#"<svg xmlns="{}" version="1.1" width="{}mm" height="{}mm" viewBox="0 0 {} {}">"#,
            SVG_NAMESPACE,
            fmt_num(self.page_mm.0),
            fmt_num(self.page_mm.1),
            fmt_num(d.page.width),
            fmt_num(d.page.height)
        )?;
        self.write_style(out)?;

        // Stacking order: page, grid, then the rectangle on top.
        writeln!(
            out,
            r#"  <rect class="page-boundary" x="0" y="0" width="{}" height="{}"/>"#,
            fmt_num(d.page.width),
            fmt_num(d.page.height)
        )?;
        self.write_grid(out)?;
        writeln!(
            out,
            r#"  <rect class="rectangle" x="{}" y="{}" width="{}" height="{}"/>"#,
            fmt_num(d.rectangle.x),
            fmt_num(d.rectangle.y),
            fmt_num(d.rectangle.width),
            fmt_num(d.rectangle.height)
        )?;
        out.write_str("</svg>\n")
    }
}
