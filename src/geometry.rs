//! Page geometry: rectangle placement and grid primitive generation.
//!
//! Everything in a [`Layout`] built by [`Layout::compute`] is in millimeters,
//! page coordinates, origin at the top-left corner of the page. Rendering
//! calls [`Layout::to_device`] once to move into viewBox pixels.

use crate::settings::Settings;
use crate::units::{GridType, PX_PER_MM};
use serde::Serialize;

/// Upper bound on candidate grid positions along one axis.
pub const MAX_POSITIONS_PER_AXIS: usize = 5_000;

/// Upper bound on dots in one layout. Rows past the bound are dropped whole,
/// so the drawn dots are a prefix of the full row-major grid.
pub const MAX_PRIMITIVES: usize = 250_000;

/// Slack on the inclusive far edge, so an extent that is an exact multiple of
/// the spacing keeps its last line despite float error.
const EDGE_TOLERANCE_MM: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment with an absolute tolerance.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.x - tolerance
            && p.x <= self.right() + tolerance
            && p.y >= self.y - tolerance
            && p.y <= self.bottom() + tolerance
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Which family a grid line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAxis {
    Vertical,
    Horizontal,
}

/// A single element of the interior pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridPrimitive {
    Line {
        axis: LineAxis,
        from: Point,
        to: Point,
    },
    Dot {
        center: Point,
        radius: f64,
    },
}

impl GridPrimitive {
    /// Points that must lie inside the rectangle.
    pub fn anchor_points(&self) -> Vec<Point> {
        match self {
            GridPrimitive::Line { from, to, .. } => vec![*from, *to],
            GridPrimitive::Dot { center, .. } => vec![*center],
        }
    }

    fn scale(self, factor: f64) -> Self {
        match self {
            GridPrimitive::Line { axis, from, to } => GridPrimitive::Line {
                axis,
                from: from.scale(factor),
                to: to.scale(factor),
            },
            GridPrimitive::Dot { center, radius } => GridPrimitive::Dot {
                center: center.scale(factor),
                radius: radius * factor,
            },
        }
    }
}

/// Candidate positions along one axis: `start + i * spacing` for every `i`
/// that keeps the position within `start + extent`.
///
/// A spacing that is not strictly positive yields a single position at
/// `start`. A negative or non-finite extent yields nothing.
pub fn axis_positions(start: f64, extent: f64, spacing: f64) -> Vec<f64> {
    if !start.is_finite() || !extent.is_finite() || extent < 0.0 {
        return Vec::new();
    }
    let end = start + extent;
    if spacing.is_nan() || spacing <= 0.0 {
        return vec![start];
    }

    let steps = ((extent + EDGE_TOLERANCE_MM) / spacing).floor();
    let count = if steps >= (MAX_POSITIONS_PER_AXIS - 1) as f64 {
        MAX_POSITIONS_PER_AXIS
    } else {
        steps as usize + 1
    };

    (0..count)
        .map(|i| (start + i as f64 * spacing).min(end))
        .collect()
}

/// Fully resolved drawing for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Whole canvas; always anchored at the origin.
    pub page: Rect,
    /// Centered rectangle bounding the grid. May start at negative
    /// coordinates when it is larger than the page.
    pub rectangle: Rect,
    pub grid_type: GridType,
    pub columns: Vec<f64>,
    pub rows: Vec<f64>,
    pub primitives: Vec<GridPrimitive>,
    pub line_width: f64,
    pub dot_radius: f64,
    pub border_width: f64,
}

impl Layout {
    /// Build the millimeter layout for `settings`.
    pub fn compute(settings: &Settings) -> Layout {
        let (page_w, page_h) = settings.page_size_mm();
        let page = Rect {
            x: 0.0,
            y: 0.0,
            width: page_w,
            height: page_h,
        };

        let rectangle = Rect {
            x: (page_w - settings.rectangle_width) / 2.0,
            y: (page_h - settings.rectangle_height) / 2.0,
            width: settings.rectangle_width,
            height: settings.rectangle_height,
        };

        let columns = axis_positions(rectangle.x, rectangle.width, settings.grid_spacing_x);
        let rows = axis_positions(rectangle.y, rectangle.height, settings.grid_spacing_y);
        let dot_radius = settings.dot_size / 2.0;

        let primitives = if columns.is_empty() || rows.is_empty() {
            Vec::new()
        } else {
            match settings.grid_type {
                GridType::Lines => line_primitives(&rectangle, &columns, &rows),
                GridType::Dots => dot_primitives(&columns, &rows, dot_radius),
            }
        };

        Layout {
            page,
            rectangle,
            grid_type: settings.grid_type,
            columns,
            rows,
            primitives,
            line_width: settings.line_width,
            dot_radius,
            border_width: settings.rectangle_border_width,
        }
    }

    /// Same layout scaled into device pixels.
    pub fn to_device(&self) -> Layout {
        let k = PX_PER_MM;
        Layout {
            page: self.page.scale(k),
            rectangle: self.rectangle.scale(k),
            grid_type: self.grid_type,
            columns: self.columns.iter().map(|c| c * k).collect(),
            rows: self.rows.iter().map(|r| r * k).collect(),
            primitives: self.primitives.iter().map(|p| p.scale(k)).collect(),
            line_width: self.line_width * k,
            dot_radius: self.dot_radius * k,
            border_width: self.border_width * k,
        }
    }

    pub fn rectangle_origin(&self) -> Point {
        self.rectangle.origin()
    }

    /// (vertical, horizontal) line counts.
    pub fn line_counts(&self) -> (usize, usize) {
        self.primitives
            .iter()
            .fold((0, 0), |(v, h), primitive| match primitive {
                GridPrimitive::Line {
                    axis: LineAxis::Vertical,
                    ..
                } => (v + 1, h),
                GridPrimitive::Line {
                    axis: LineAxis::Horizontal,
                    ..
                } => (v, h + 1),
                GridPrimitive::Dot { .. } => (v, h),
            })
    }

    pub fn dot_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, GridPrimitive::Dot { .. }))
            .count()
    }
}

fn line_primitives(rectangle: &Rect, columns: &[f64], rows: &[f64]) -> Vec<GridPrimitive> {
    let vertical = columns.iter().map(|&x| GridPrimitive::Line {
        axis: LineAxis::Vertical,
        from: Point::new(x, rectangle.y),
        to: Point::new(x, rectangle.bottom()),
    });
    let horizontal = rows.iter().map(|&y| GridPrimitive::Line {
        axis: LineAxis::Horizontal,
        from: Point::new(rectangle.x, y),
        to: Point::new(rectangle.right(), y),
    });
    vertical.chain(horizontal).collect()
}

fn dot_primitives(columns: &[f64], rows: &[f64], radius: f64) -> Vec<GridPrimitive> {
    let kept_rows = rows.len().min(MAX_PRIMITIVES / columns.len().max(1));
    let mut dots = Vec::with_capacity(columns.len() * kept_rows);
    for &y in &rows[..kept_rows] {
        for &x in columns {
            dots.push(GridPrimitive::Dot {
                center: Point::new(x, y),
                radius,
            });
        }
    }
    dots
}
