//! Named paper sizes.

use crate::settings::Settings;
use crate::units::PageUnit;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A standard sheet size, portrait, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PagePreset {
    pub name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

pub const PRESETS: &[PagePreset] = &[
    PagePreset {
        name: "a3",
        width_mm: 297.0,
        height_mm: 420.0,
    },
    PagePreset {
        name: "a4",
        width_mm: 210.0,
        height_mm: 297.0,
    },
    PagePreset {
        name: "a5",
        width_mm: 148.0,
        height_mm: 210.0,
    },
    PagePreset {
        name: "letter",
        width_mm: 215.9,
        height_mm: 279.4,
    },
    PagePreset {
        name: "legal",
        width_mm: 215.9,
        height_mm: 355.6,
    },
    PagePreset {
        name: "tabloid",
        width_mm: 279.4,
        height_mm: 431.8,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

impl PagePreset {
    /// Look up a preset by case-insensitive name.
    pub fn find(name: &str) -> Option<PagePreset> {
        let name = name.trim();
        PRESETS
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// (width, height) in millimeters for the given orientation.
    pub fn size_mm(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Portrait => (self.width_mm, self.height_mm),
            Orientation::Landscape => (self.height_mm, self.width_mm),
        }
    }

    /// Overwrite the page size in `settings`, switching the unit to mm.
    pub fn apply(&self, settings: &mut Settings, orientation: Orientation) {
        let (width, height) = self.size_mm(orientation);
        settings.page_width = width;
        settings.page_height = height;
        settings.page_unit = PageUnit::Mm;
    }
}

impl FromStr for PagePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PagePreset::find(s).ok_or_else(|| {
            let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
            format!("Unknown page preset: {} (known: {})", s, names.join(", "))
        })
    }
}
