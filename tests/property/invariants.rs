//! Property-based tests for layout and markup invariants

#[path = "../integration/test_utils.rs"]
mod test_utils;

use gridpaper::geometry::{axis_positions, Layout, MAX_POSITIONS_PER_AXIS, MAX_PRIMITIVES};
use gridpaper::{generate, GridType, PageUnit, Settings};
use proptest::prelude::*;
use test_utils::{attr, elements, px_to_mm};

/// Millimeter slack for values read back from four-decimal pixel output.
const MARKUP_TOLERANCE_MM: f64 = 1e-3;

fn grid_type() -> impl Strategy<Value = GridType> {
    prop_oneof![Just(GridType::Lines), Just(GridType::Dots)]
}

fn settings_with_spacing(min_spacing: f64) -> impl Strategy<Value = Settings> {
    (
        (1.0f64..600.0, 1.0f64..600.0),
        (0.0f64..700.0, 0.0f64..700.0),
        (min_spacing..50.0, min_spacing..50.0),
        grid_type(),
    )
        .prop_map(|((pw, ph), (rw, rh), (sx, sy), grid_type)| Settings {
            page_width: pw,
            page_height: ph,
            page_unit: PageUnit::Mm,
            grid_type,
            grid_spacing_x: sx,
            grid_spacing_y: sy,
            rectangle_width: rw,
            rectangle_height: rh,
            ..Default::default()
        })
}

fn settings() -> impl Strategy<Value = Settings> {
    settings_with_spacing(0.5)
}

/// Coarser grids, so every case can be rendered and read back quickly.
fn renderable_settings() -> impl Strategy<Value = Settings> {
    settings_with_spacing(5.0)
}

/// (x, y, width, height) of one element, in millimeters.
fn rect_mm(element: &str) -> (f64, f64, f64, f64) {
    (
        px_to_mm(attr(element, "x")),
        px_to_mm(attr(element, "y")),
        px_to_mm(attr(element, "width")),
        px_to_mm(attr(element, "height")),
    )
}

proptest! {
    #[test]
    fn rectangle_is_centered(settings in settings()) {
        let layout = Layout::compute(&settings);
        let left = layout.rectangle.x;
        let right = layout.page.width - layout.rectangle.right();
        let top = layout.rectangle.y;
        let bottom = layout.page.height - layout.rectangle.bottom();
        prop_assert!((left - right).abs() < 1e-9);
        prop_assert!((top - bottom).abs() < 1e-9);
    }

    #[test]
    fn primitives_stay_inside_rectangle(settings in settings()) {
        let layout = Layout::compute(&settings);
        for primitive in &layout.primitives {
            for point in primitive.anchor_points() {
                prop_assert!(layout.rectangle.contains(point, 1e-6));
            }
        }
    }

    #[test]
    fn counts_follow_spacing(settings in settings()) {
        let layout = Layout::compute(&settings);
        let expected_columns =
            ((settings.rectangle_width + 1e-9) / settings.grid_spacing_x).floor() as usize + 1;
        prop_assert_eq!(layout.columns.len(), expected_columns.min(MAX_POSITIONS_PER_AXIS));
        match settings.grid_type {
            GridType::Lines => prop_assert_eq!(
                layout.line_counts(),
                (layout.columns.len(), layout.rows.len())
            ),
            GridType::Dots => {
                let kept_rows = layout.rows.len().min(MAX_PRIMITIVES / layout.columns.len());
                prop_assert_eq!(layout.dot_count(), layout.columns.len() * kept_rows);
                prop_assert!(layout.dot_count() <= MAX_PRIMITIVES);
            }
        }
    }

    #[test]
    fn axis_positions_terminate(
        start in -500.0f64..500.0,
        extent in -10.0f64..1000.0,
        spacing in prop_oneof![Just(0.0), Just(-1.0), Just(f64::NAN), 1e-6f64..100.0],
    ) {
        let positions = axis_positions(start, extent, spacing);
        prop_assert!(positions.len() <= MAX_POSITIONS_PER_AXIS);
        if extent < 0.0 {
            prop_assert!(positions.is_empty());
        }
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn centimetres_equal_tenfold_millimetres(
        width in 1.0f64..60.0,
        height in 1.0f64..60.0,
        grid_type in grid_type(),
    ) {
        let base = Settings { grid_type, rectangle_width: 50.0, rectangle_height: 50.0, ..Default::default() };
        let cm = Layout::compute(&Settings { page_width: width, page_height: height, page_unit: PageUnit::Cm, ..base });
        let mm = Layout::compute(&Settings { page_width: width * 10.0, page_height: height * 10.0, page_unit: PageUnit::Mm, ..base });
        prop_assert!((cm.rectangle.x - mm.rectangle.x).abs() < 1e-9);
        prop_assert!((cm.rectangle.y - mm.rectangle.y).abs() < 1e-9);
        prop_assert_eq!(cm.primitives.len(), mm.primitives.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generate_is_deterministic(settings in renderable_settings()) {
        prop_assert_eq!(generate(&settings), generate(&settings));
    }

    #[test]
    fn emitted_rectangle_is_centered(settings in renderable_settings()) {
        let svg = generate(&settings);
        let page = elements(&svg, "rect", "page-boundary");
        let rect = elements(&svg, "rect", "rectangle");
        prop_assert_eq!(page.len(), 1);
        prop_assert_eq!(rect.len(), 1);

        let (_, _, page_w, page_h) = rect_mm(page[0]);
        let (x, y, w, h) = rect_mm(rect[0]);
        prop_assert!((page_w - settings.page_width).abs() < MARKUP_TOLERANCE_MM);
        prop_assert!((page_h - settings.page_height).abs() < MARKUP_TOLERANCE_MM);
        prop_assert!((x - (page_w - (x + w))).abs() < MARKUP_TOLERANCE_MM);
        prop_assert!((y - (page_h - (y + h))).abs() < MARKUP_TOLERANCE_MM);

        // an oversized rectangle overhangs with a negative origin
        if settings.rectangle_width > settings.page_width + MARKUP_TOLERANCE_MM {
            prop_assert!(x < 0.0);
        }
        if settings.rectangle_height > settings.page_height + MARKUP_TOLERANCE_MM {
            prop_assert!(y < 0.0);
        }
    }

    #[test]
    fn emitted_grid_stays_inside_rectangle(settings in renderable_settings()) {
        let svg = generate(&settings);
        let (x, y, w, h) = rect_mm(elements(&svg, "rect", "rectangle")[0]);
        let inside_x = |v: f64| v >= x - MARKUP_TOLERANCE_MM && v <= x + w + MARKUP_TOLERANCE_MM;
        let inside_y = |v: f64| v >= y - MARKUP_TOLERANCE_MM && v <= y + h + MARKUP_TOLERANCE_MM;

        let lines = elements(&svg, "line", "grid-line");
        let dots = elements(&svg, "circle", "grid-dot");
        match settings.grid_type {
            GridType::Lines => prop_assert!(dots.is_empty()),
            GridType::Dots => prop_assert!(lines.is_empty()),
        }
        for line in &lines {
            prop_assert!(inside_x(px_to_mm(attr(line, "x1"))), "{}", line);
            prop_assert!(inside_x(px_to_mm(attr(line, "x2"))), "{}", line);
            prop_assert!(inside_y(px_to_mm(attr(line, "y1"))), "{}", line);
            prop_assert!(inside_y(px_to_mm(attr(line, "y2"))), "{}", line);
        }
        for dot in &dots {
            prop_assert!(inside_x(px_to_mm(attr(dot, "cx"))), "{}", dot);
            prop_assert!(inside_y(px_to_mm(attr(dot, "cy"))), "{}", dot);
        }
    }
}
