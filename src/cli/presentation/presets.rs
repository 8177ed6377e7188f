//! Presets command presentation.

use crate::error::ApiError;
use crate::presets::{Orientation, PRESETS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

pub fn format_presets_text() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Preset", "Width (mm)", "Height (mm)"]);
    for preset in PRESETS {
        let (w, h) = preset.size_mm(Orientation::Portrait);
        table.add_row(vec![preset.name.to_string(), w.to_string(), h.to_string()]);
    }
    format!("{}\n\nUse --landscape to swap width and height.", table)
}

pub fn format_presets_json() -> Result<String, ApiError> {
    let list: Vec<_> = PRESETS
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "width_mm": p.width_mm,
                "height_mm": p.height_mm,
            })
        })
        .collect();
    let out = json!({ "presets": list, "total": PRESETS.len() });
    Ok(serde_json::to_string_pretty(&out)?)
}
