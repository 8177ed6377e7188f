//! End-to-end scenarios for `generate`, checked against the emitted markup.

use super::test_utils::{assert_close, attr, elements, px_to_mm};
use gridpaper::{generate, GridType, Layout, PageUnit, Settings};

fn a4_scenario() -> Settings {
    Settings {
        page_width: 210.0,
        page_height: 297.0,
        page_unit: PageUnit::Mm,
        grid_type: GridType::Lines,
        grid_spacing_x: 10.0,
        grid_spacing_y: 10.0,
        line_width: 0.2,
        rectangle_width: 100.0,
        rectangle_height: 80.0,
        rectangle_border_width: 0.4,
        ..Default::default()
    }
}

#[test]
fn test_a4_lines_scenario() {
    let svg = generate(&a4_scenario());

    assert!(svg.contains(r#"width="210mm" height="297mm""#));
    let page = elements(&svg, "rect", "page-boundary");
    assert_eq!(page.len(), 1);
    assert_close(attr(page[0], "width"), 793.7, 0.01);
    assert_close(attr(page[0], "height"), 1122.5, 0.05);

    let rect = elements(&svg, "rect", "rectangle");
    assert_eq!(rect.len(), 1);
    assert_close(px_to_mm(attr(rect[0], "x")), 55.0, 1e-3);
    assert_close(px_to_mm(attr(rect[0], "y")), 108.5, 1e-3);

    let lines = elements(&svg, "line", "grid-line");
    let vertical: Vec<_> = lines
        .iter()
        .filter(|l| attr(l, "x1") == attr(l, "x2"))
        .collect();
    let horizontal: Vec<_> = lines
        .iter()
        .filter(|l| attr(l, "y1") == attr(l, "y2"))
        .collect();
    assert_eq!(vertical.len(), 11);
    assert_eq!(horizontal.len(), 9);
    assert_eq!(lines.len(), 20);

    assert_close(px_to_mm(attr(vertical[0], "x1")), 55.0, 1e-3);
    assert_close(px_to_mm(attr(vertical[10], "x1")), 155.0, 1e-3);
    assert_close(px_to_mm(attr(horizontal[8], "y1")), 188.5, 1e-3);
    assert!(elements(&svg, "circle", "grid-dot").is_empty());
}

#[test]
fn test_a4_dots_scenario() {
    let settings = Settings {
        grid_type: GridType::Dots,
        ..a4_scenario()
    };
    let svg = generate(&settings);
    let dots = elements(&svg, "circle", "grid-dot");
    assert_eq!(dots.len(), 99);
    assert!(elements(&svg, "line", "grid-line").is_empty());
    assert_close(px_to_mm(attr(dots[0], "cx")), 55.0, 1e-3);
    assert_close(px_to_mm(attr(dots[0], "cy")), 108.5, 1e-3);
    assert_close(px_to_mm(attr(dots[0], "r")), 0.25, 1e-3);
}

#[test]
fn test_stacking_order() {
    let svg = generate(&a4_scenario());
    let page = svg.find("page-boundary\" x=").unwrap();
    let grid = svg.find(r#"<g class="grid""#).unwrap();
    let rect = svg.find(r#"<rect class="rectangle""#).unwrap();
    assert!(page < grid && grid < rect);
}

#[test]
fn test_centimetres_match_millimetres() {
    let mm = generate(&a4_scenario());
    let cm = generate(&Settings {
        page_width: 21.0,
        page_height: 29.7,
        page_unit: PageUnit::Cm,
        ..a4_scenario()
    });
    let mm_rect = elements(&mm, "rect", "rectangle")[0];
    let cm_rect = elements(&cm, "rect", "rectangle")[0];
    assert_close(attr(cm_rect, "x"), attr(mm_rect, "x"), 1e-3);
    assert_close(attr(cm_rect, "y"), attr(mm_rect, "y"), 1e-3);
    assert_eq!(
        elements(&mm, "line", "grid-line").len(),
        elements(&cm, "line", "grid-line").len()
    );
}

#[test]
fn test_inches_convert_to_millimetres() {
    let settings = Settings {
        page_width: 8.27,
        page_height: 11.69,
        page_unit: PageUnit::In,
        ..a4_scenario()
    };
    let layout = Layout::compute(&settings);
    assert_close(layout.page.width, 210.058, 1e-9);
    let svg = generate(&settings);
    assert!(svg.contains(r#"width="210.058mm""#));
}

#[test]
fn test_non_positive_spacing_terminates() {
    for spacing in [0.0, -5.0, f64::NAN] {
        let settings = Settings {
            grid_spacing_x: spacing,
            grid_spacing_y: spacing,
            ..a4_scenario()
        };
        let svg = generate(&settings);
        assert_eq!(elements(&svg, "line", "grid-line").len(), 2);
    }
}

#[test]
fn test_oversized_rectangle_overhangs() {
    let settings = Settings {
        rectangle_width: 300.0,
        ..a4_scenario()
    };
    let svg = generate(&settings);
    let rect = elements(&svg, "rect", "rectangle")[0];
    assert_close(px_to_mm(attr(rect, "x")), -45.0, 1e-3);
    assert_eq!(elements(&svg, "line", "grid-line").len(), 31 + 9);
}

#[test]
fn test_generate_is_idempotent() {
    for grid_type in [GridType::Lines, GridType::Dots] {
        let settings = Settings {
            grid_type,
            ..a4_scenario()
        };
        assert_eq!(generate(&settings), generate(&settings));
    }
}
