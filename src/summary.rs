//! Derived geometry report for `gridpaper inspect`.

use crate::geometry::{Layout, Point};
use crate::settings::Settings;
use crate::units::{GridType, PageUnit, PX_PER_MM};
use serde::Serialize;

/// What the generator would draw, without the markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub page_unit: PageUnit,
    pub grid_type: GridType,
    pub page_mm: (f64, f64),
    pub page_px: (f64, f64),
    pub rectangle_origin_mm: Point,
    pub rectangle_size_mm: (f64, f64),
    pub columns: usize,
    pub rows: usize,
    pub vertical_lines: usize,
    pub horizontal_lines: usize,
    pub dots: usize,
    pub overhangs_page: bool,
}

impl LayoutSummary {
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let layout = Layout::compute(&settings);
        let (vertical_lines, horizontal_lines) = layout.line_counts();
        let page = layout.page;
        let rect = layout.rectangle;

        LayoutSummary {
            page_unit: settings.page_unit,
            grid_type: settings.grid_type,
            page_mm: (page.width, page.height),
            page_px: (page.width * PX_PER_MM, page.height * PX_PER_MM),
            rectangle_origin_mm: rect.origin(),
            rectangle_size_mm: (rect.width, rect.height),
            columns: layout.columns.len(),
            rows: layout.rows.len(),
            vertical_lines,
            horizontal_lines,
            dots: layout.dot_count(),
            overhangs_page: rect.x < 0.0 || rect.y < 0.0,
        }
    }
}
