//! Inspect command presentation.

use crate::error::ApiError;
use crate::markup::fmt_num;
use crate::summary::LayoutSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn pair(values: (f64, f64), suffix: &str) -> String {
    format!("{} x {} {}", fmt_num(values.0), fmt_num(values.1), suffix)
}

pub fn format_summary_text(summary: &LayoutSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Property", "Value"]);
    table.add_row(vec!["Page".to_string(), pair(summary.page_mm, "mm")]);
    table.add_row(vec!["Canvas".to_string(), pair(summary.page_px, "px")]);
    table.add_row(vec![
        "Rectangle".to_string(),
        pair(summary.rectangle_size_mm, "mm"),
    ]);
    table.add_row(vec![
        "Rectangle origin".to_string(),
        format!(
            "({}, {}) mm",
            fmt_num(summary.rectangle_origin_mm.x),
            fmt_num(summary.rectangle_origin_mm.y)
        ),
    ]);
    table.add_row(vec!["Grid".to_string(), summary.grid_type.to_string()]);
    table.add_row(vec![
        "Positions".to_string(),
        format!("{} columns x {} rows", summary.columns, summary.rows),
    ]);
    table.add_row(vec![
        "Lines".to_string(),
        format!(
            "{} vertical, {} horizontal",
            summary.vertical_lines, summary.horizontal_lines
        ),
    ]);
    table.add_row(vec!["Dots".to_string(), summary.dots.to_string()]);

    let mut out = format!("{}\n\n{}", "Layout".bold().underline(), table);
    if summary.overhangs_page {
        out.push_str(&format!(
            "\n\n{} rectangle is larger than the page and overhangs its edge",
            "note:".yellow()
        ));
    }
    out
}

pub fn format_summary_json(summary: &LayoutSummary) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
