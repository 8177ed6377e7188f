//! Length units and grid kinds.
//!
//! Millimeters are the only internal unit. Page dimensions may be entered in
//! millimeters, centimeters or inches and are normalized once, up front.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per centimeter.
pub const MM_PER_CM: f64 = 10.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Device pixels per millimeter at 96 DPI. Every millimeter quantity is
/// multiplied by this to land in the SVG viewBox coordinate space.
pub const PX_PER_MM: f64 = 3.779527559;

/// Unit the page dimensions are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageUnit {
    #[default]
    Mm,
    Cm,
    In,
}

impl PageUnit {
    /// Multiplier that converts a value in this unit to millimeters.
    pub fn mm_factor(self) -> f64 {
        match self {
            PageUnit::Mm => 1.0,
            PageUnit::Cm => MM_PER_CM,
            PageUnit::In => MM_PER_INCH,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_factor()
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageUnit::Mm => "mm",
            PageUnit::Cm => "cm",
            PageUnit::In => "in",
        }
    }
}

impl fmt::Display for PageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(PageUnit::Mm),
            "cm" | "centimeter" | "centimeters" => Ok(PageUnit::Cm),
            "in" | "inch" | "inches" => Ok(PageUnit::In),
            other => Err(format!(
                "Unknown page unit: {} (must be 'mm', 'cm', or 'in')",
                other
            )),
        }
    }
}

/// Pattern drawn inside the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    #[default]
    Lines,
    Dots,
}

impl GridType {
    pub fn slug(self) -> &'static str {
        match self {
            GridType::Lines => "lines",
            GridType::Dots => "dots",
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GridType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" => Ok(GridType::Lines),
            "dots" | "dot" => Ok(GridType::Dots),
            other => Err(format!(
                "Unknown grid type: {} (must be 'lines' or 'dots')",
                other
            )),
        }
    }
}
