use chrono::NaiveDate;
use contrib_canvas::models::theme::{hex, STANDARD};
use contrib_canvas::surface::DrawOp;
use contrib_canvas::{
    render_heatmap, render_trend_line, ActivityDataset, ChartError, Contribution, RasterSurface,
    RecordingSurface, RenderOptions, ThemeTable, Year,
};

fn example_dataset() -> ActivityDataset {
    ActivityDataset {
        years: vec![Year::new("2021", 5, "2021-01-01", "2021-12-31")],
        contributions: vec![Contribution::new("2021-01-01", 5, 2)],
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
}

#[test]
fn heatmap_places_single_cell_for_example() {
    let data = example_dataset();
    let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin()).today(today());
    let mut surface = RecordingSurface::new();
    render_heatmap(&mut surface, &options).unwrap();

    let cells: Vec<_> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { x, y, width, height, color } if *width == 10.0 && *height == 10.0 => {
                Some((*x, *y, *color))
            }
            _ => None,
        })
        .collect();
    // 2021-01-01 is the Friday of the week starting Saturday 2020-12-26: column 0, row 6
    assert_eq!(cells, vec![(20.0, 80.0 + 15.0 + 6.0 * 12.0, STANDARD.grades[2])]);
    assert!(surface.texts().contains(&"2021: 5 Contributions"));
}

#[test]
fn heatmap_rasterizes_cell_color() {
    let data = example_dataset();
    let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin()).today(today());
    let mut surface = RasterSurface::new();
    render_heatmap(&mut surface, &options).unwrap();

    let image = surface.image();
    assert_eq!(image.dimensions(), (676, 221));
    assert_eq!(*image.get_pixel(25, 172), hex(0x40c463));
    assert_eq!(*image.get_pixel(37, 172), STANDARD.background);
    assert_eq!(*image.get_pixel(100, 55), STANDARD.grades[0]);
}

#[test]
fn heatmap_scales_for_high_dpi() {
    let data = example_dataset();
    let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
        .today(today())
        .scale_factor(2.0);
    let mut surface = RasterSurface::new();
    render_heatmap(&mut surface, &options).unwrap();

    let image = surface.image();
    assert_eq!(image.dimensions(), (1352, 442));
    assert_eq!(*image.get_pixel(50, 344), hex(0x40c463));
}

#[test]
fn trend_line_writes_png() {
    let data = ActivityDataset {
        years: vec![
            Year::new("2021", 5, "2021-01-01", "2021-12-31"),
            Year::new("2020", 2, "2020-01-01", "2020-12-31"),
        ],
        contributions: vec![
            Contribution::new("2021-01-01", 5, 2),
            Contribution::new("2020-05-05", 2, 1),
        ],
    };
    let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
        .theme_name("dracula")
        .footer_text("generated")
        .today(today());
    let mut surface = RasterSurface::new();
    render_trend_line(&mut surface, &options).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trend.png");
    surface.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (676, 640));
    // first marker: 2020 at the origin, 2/5 of the way up
    assert_eq!(*decoded.get_pixel(70, 515 - 180 + 2), hex(0x44475a));
}

#[test]
fn unknown_theme_renders_with_standard() {
    let data = example_dataset();
    let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
        .theme_name("neon-nights")
        .today(today());
    let mut surface = RecordingSurface::new();
    render_heatmap(&mut surface, &options).unwrap();
    assert_eq!(surface.rects()[0].2, STANDARD.background);
}

#[test]
fn malformed_json_is_invalid_dataset() {
    let err = ActivityDataset::from_json(r#"{"years": "nope", "contributions": []}"#).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}
