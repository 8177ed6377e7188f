//! CLI parse: clap types for gridpaper. Definitions plus flag-to-settings merge.

use crate::error::ApiError;
use crate::presets::{Orientation, PagePreset};
use crate::settings::Settings;
use crate::units::{GridType, PageUnit};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gridpaper CLI - printable grid and dot paper as true-scale SVG
#[derive(Parser)]
#[command(name = "gridpaper")]
#[command(version)]
#[command(about = "Generate printable grid and dot paper as physically-scaled SVG")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory (config lookup and default output location)
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an SVG file
    Generate {
        #[command(flatten)]
        settings: SettingsArgs,
        /// Output file (default: <output.directory or workspace>/<output.file_name>)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Write the SVG to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Show the derived geometry without writing anything
    Inspect {
        #[command(flatten)]
        settings: SettingsArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List named page sizes
    Presets {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Page and grid flags shared by `generate` and `inspect`. Every flag is
/// optional; unset flags keep the configured default.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Named page size (a3, a4, a5, letter, legal, tabloid)
    #[arg(long)]
    pub preset: Option<String>,

    /// Landscape orientation
    #[arg(long)]
    pub landscape: bool,

    /// Page width in --unit
    #[arg(long, allow_negative_numbers = true)]
    pub page_width: Option<f64>,

    /// Page height in --unit
    #[arg(long, allow_negative_numbers = true)]
    pub page_height: Option<f64>,

    /// Unit for page width/height (mm, cm, in)
    #[arg(long)]
    pub unit: Option<PageUnit>,

    /// Grid pattern (lines, dots)
    #[arg(long)]
    pub grid: Option<GridType>,

    /// Grid spacing on both axes, mm
    #[arg(long, allow_negative_numbers = true)]
    pub spacing: Option<f64>,

    /// Horizontal grid spacing, mm (overrides --spacing)
    #[arg(long, allow_negative_numbers = true)]
    pub spacing_x: Option<f64>,

    /// Vertical grid spacing, mm (overrides --spacing)
    #[arg(long, allow_negative_numbers = true)]
    pub spacing_y: Option<f64>,

    /// Grid line stroke width, mm
    #[arg(long, allow_negative_numbers = true)]
    pub line_width: Option<f64>,

    /// Dot diameter, mm
    #[arg(long, allow_negative_numbers = true)]
    pub dot_size: Option<f64>,

    /// Rectangle width, mm
    #[arg(long, allow_negative_numbers = true)]
    pub rect_width: Option<f64>,

    /// Rectangle height, mm
    #[arg(long, allow_negative_numbers = true)]
    pub rect_height: Option<f64>,

    /// Rectangle border stroke width, mm
    #[arg(long, allow_negative_numbers = true)]
    pub border_width: Option<f64>,
}

impl SettingsArgs {
    /// Apply the given flags on top of `base`.
    ///
    /// Order: preset (with orientation), explicit page size and unit, then
    /// `--landscape` without a preset swaps the page so it is wider than tall.
    pub fn apply(&self, base: Settings) -> Result<Settings, ApiError> {
        let mut settings = base;
        let orientation = if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };

        if let Some(ref name) = self.preset {
            let preset: PagePreset = name.parse().map_err(ApiError::UnknownPreset)?;
            preset.apply(&mut settings, orientation);
        }
        if let Some(unit) = self.unit {
            settings.page_unit = unit;
        }
        if let Some(width) = self.page_width {
            settings.page_width = width;
        }
        if let Some(height) = self.page_height {
            settings.page_height = height;
        }
        if self.landscape && self.preset.is_none() && settings.page_height > settings.page_width
        {
            std::mem::swap(&mut settings.page_width, &mut settings.page_height);
        }

        if let Some(grid) = self.grid {
            settings.grid_type = grid;
        }
        if let Some(spacing) = self.spacing {
            settings.grid_spacing_x = spacing;
            settings.grid_spacing_y = spacing;
        }
        if let Some(x) = self.spacing_x {
            settings.grid_spacing_x = x;
        }
        if let Some(y) = self.spacing_y {
            settings.grid_spacing_y = y;
        }
        if let Some(width) = self.line_width {
            settings.line_width = width;
        }
        if let Some(size) = self.dot_size {
            settings.dot_size = size;
        }
        if let Some(width) = self.rect_width {
            settings.rectangle_width = width;
        }
        if let Some(height) = self.rect_height {
            settings.rectangle_height = height;
        }
        if let Some(width) = self.border_width {
            settings.rectangle_border_width = width;
        }

        Ok(settings)
    }
}
