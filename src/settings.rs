//! Settings record consumed by the generator.
//!
//! All lengths except the page size are millimeters. The page size is in
//! `page_unit`. A `Settings` value is built from user input, handed to
//! [`crate::generate`], and dropped; nothing here is cached.

use crate::geometry::{axis_positions, MAX_POSITIONS_PER_AXIS, MAX_PRIMITIVES};
use crate::units::{GridType, PageUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to draw one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_width: f64,
    pub page_height: f64,
    pub page_unit: PageUnit,
    pub grid_type: GridType,
    pub grid_spacing_x: f64,
    pub grid_spacing_y: f64,
    /// Stroke width of grid lines.
    pub line_width: f64,
    /// Dot diameter.
    pub dot_size: f64,
    pub rectangle_width: f64,
    pub rectangle_height: f64,
    pub rectangle_border_width: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            page_unit: PageUnit::Mm,
            grid_type: GridType::Lines,
            grid_spacing_x: 5.0,
            grid_spacing_y: 5.0,
            line_width: 0.1,
            dot_size: 0.5,
            rectangle_width: 180.0,
            rectangle_height: 260.0,
            rectangle_border_width: 0.3,
        }
    }
}

/// Non-fatal observations about a settings value. Generation always proceeds;
/// these only explain why the output may look degenerate.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsWarning {
    NonPositive { field: &'static str, value: f64 },
    RectangleExceedsPage { axis: char, rectangle: f64, page: f64 },
    SpacingTooFine { axis: char, positions: f64 },
    TooManyDots { requested: usize },
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsWarning::NonPositive { field, value } => {
                write!(f, "{} should be positive (got {})", field, value)
            }
            SettingsWarning::RectangleExceedsPage {
                axis,
                rectangle,
                page,
            } => write!(
                f,
                "rectangle {} extent {}mm exceeds page {}mm; it will overhang the page edge",
                axis, rectangle, page
            ),
            SettingsWarning::SpacingTooFine { axis, positions } => write!(
                f,
                "spacing on {} would need {} grid positions; capped at {}",
                axis, positions, MAX_POSITIONS_PER_AXIS
            ),
            SettingsWarning::TooManyDots { requested } => write!(
                f,
                "dot grid would need {} dots; rows past {} dots are dropped",
                requested, MAX_PRIMITIVES
            ),
        }
    }
}

/// Largest magnitude accepted for any length, in the field's own unit.
/// Keeps every derived millimeter and pixel value finite.
pub const MAX_DIMENSION: f64 = 1e9;

fn bounded(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-MAX_DIMENSION, MAX_DIMENSION)
    } else {
        0.0
    }
}

impl Settings {
    /// Page size normalized to millimeters.
    pub fn page_size_mm(&self) -> (f64, f64) {
        (
            self.page_unit.to_mm(self.page_width),
            self.page_unit.to_mm(self.page_height),
        )
    }

    /// Coerce NaN and infinite values to zero, the same default an input form
    /// falls back to for text it cannot parse, and clamp the rest to
    /// [`MAX_DIMENSION`].
    pub fn sanitized(&self) -> Settings {
        Settings {
            page_width: bounded(self.page_width),
            page_height: bounded(self.page_height),
            grid_spacing_x: bounded(self.grid_spacing_x),
            grid_spacing_y: bounded(self.grid_spacing_y),
            line_width: bounded(self.line_width),
            dot_size: bounded(self.dot_size),
            rectangle_width: bounded(self.rectangle_width),
            rectangle_height: bounded(self.rectangle_height),
            rectangle_border_width: bounded(self.rectangle_border_width),
            ..*self
        }
    }

    /// Report values that will produce degenerate output.
    pub fn validate(&self) -> Vec<SettingsWarning> {
        let mut warnings = Vec::new();

        let mut positive = vec![
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("grid_spacing_x", self.grid_spacing_x),
            ("grid_spacing_y", self.grid_spacing_y),
            ("rectangle_width", self.rectangle_width),
            ("rectangle_height", self.rectangle_height),
            ("rectangle_border_width", self.rectangle_border_width),
        ];
        match self.grid_type {
            GridType::Lines => positive.push(("line_width", self.line_width)),
            GridType::Dots => positive.push(("dot_size", self.dot_size)),
        }
        for (field, value) in positive {
            if value <= 0.0 || value.is_nan() {
                warnings.push(SettingsWarning::NonPositive { field, value });
            }
        }

        let (page_w, page_h) = self.page_size_mm();
        if self.rectangle_width > page_w {
            warnings.push(SettingsWarning::RectangleExceedsPage {
                axis: 'x',
                rectangle: self.rectangle_width,
                page: page_w,
            });
        }
        if self.rectangle_height > page_h {
            warnings.push(SettingsWarning::RectangleExceedsPage {
                axis: 'y',
                rectangle: self.rectangle_height,
                page: page_h,
            });
        }

        for (axis, extent, spacing) in [
            ('x', self.rectangle_width, self.grid_spacing_x),
            ('y', self.rectangle_height, self.grid_spacing_y),
        ] {
            if spacing > 0.0 && extent >= 0.0 {
                let positions = (extent / spacing).floor() + 1.0;
                if positions > MAX_POSITIONS_PER_AXIS as f64 {
                    warnings.push(SettingsWarning::SpacingTooFine { axis, positions });
                }
            }
        }

        if self.grid_type == GridType::Dots {
            let sane = self.sanitized();
            let columns =
                axis_positions(0.0, sane.rectangle_width, sane.grid_spacing_x).len();
            let rows = axis_positions(0.0, sane.rectangle_height, sane.grid_spacing_y).len();
            let requested = columns * rows;
            if requested > MAX_PRIMITIVES {
                warnings.push(SettingsWarning::TooManyDots { requested });
            }
        }

        warnings
    }
}
