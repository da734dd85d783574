// Yearly totals line chart
// Value axis on the left, one evenly spaced category per year, markers joined by a polyline

use std::collections::HashSet;

use super::RenderOptions;
use crate::models::{DatasetIndex, Theme};
use crate::surface::{Surface, TextStyle};
use crate::utils::config::{
    canvas_width, CANVAS_MARGIN, HEADER_HEIGHT, LINE_CHART_HEIGHT, TICK_LENGTH, X_AXIS_HEIGHT,
    Y_AXIS_WIDTH,
};

/// Vertical pixels available to the value axis
pub const GRAPH_HEIGHT: f32 = LINE_CHART_HEIGHT - X_AXIS_HEIGHT;
/// y of the category axis
pub const BASELINE_Y: f32 = LINE_CHART_HEIGHT + 70.0 - X_AXIS_HEIGHT;
/// x of the value axis and of the first category
pub const ORIGIN_X: f32 = Y_AXIS_WIDTH + CANVAS_MARGIN;

/// One marker on the chart; `y` is the top of the marker square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub total: u64,
}

pub fn canvas_size() -> (f32, f32) {
    (
        canvas_width(),
        LINE_CHART_HEIGHT + CANVAS_MARGIN + HEADER_HEIGHT + X_AXIS_HEIGHT + 10.0,
    )
}

/// Length of the category axis, shared out evenly between years
fn category_span() -> f32 {
    Y_AXIS_WIDTH + canvas_width() - 100.0
}

/// Maps `[0, largest]` onto `[0, GRAPH_HEIGHT]` pixels above the baseline
#[derive(Debug, Clone, Copy)]
pub struct ValueScale {
    largest: u64,
}

impl ValueScale {
    pub fn new(largest: u64) -> Self {
        Self { largest }
    }

    pub fn offset(&self, total: u64) -> f32 {
        if self.largest == 0 {
            return 0.0;
        }
        total as f32 * GRAPH_HEIGHT / self.largest as f32
    }
}

/// Marker positions for `totals`, in the order given
pub fn layout_points(totals: &[u64]) -> Vec<Point> {
    if totals.is_empty() {
        return Vec::new();
    }
    let scale = ValueScale::new(totals.iter().copied().max().unwrap_or(0));
    let spacing = category_span() / totals.len() as f32;

    totals
        .iter()
        .enumerate()
        .map(|(i, &total)| Point {
            x: ORIGIN_X + spacing * i as f32,
            y: BASELINE_Y - 5.0 - scale.offset(total),
            total,
        })
        .collect()
}

pub(crate) fn draw<S: Surface + ?Sized>(surface: &mut S, options: &RenderOptions<'_>, index: &DatasetIndex<'_>) {
    let theme = options.theme();
    let style = TextStyle::new(10.0, options.face());
    draw_axes(surface, theme, &style);

    // Oldest year first; the caller's ordering is left alone
    let years: Vec<_> = index.years().iter().rev().map(|y| y.source).collect();
    let totals: Vec<u64> = years.iter().map(|y| y.total).collect();
    let (Some(&smallest), Some(&largest)) = (totals.iter().min(), totals.iter().max()) else {
        return;
    };
    // A single repeated total gets a label but no tick
    let all_equal = smallest == largest;

    let scale = ValueScale::new(largest);
    let points = layout_points(&totals);
    let mut labelled = HashSet::new();

    for (year, point) in years.iter().zip(&points) {
        let offset = scale.offset(point.total);

        if labelled.insert(point.total) {
            // Zero sits on the category axis
            if point.total != 0 && !all_equal {
                surface.stroke_line(
                    (ORIGIN_X - TICK_LENGTH / 2.0, BASELINE_Y - offset),
                    (ORIGIN_X + TICK_LENGTH / 2.0, BASELINE_Y - offset),
                    theme.grades[3],
                );
            }
            surface.fill_text(
                &point.total.to_string(),
                CANVAS_MARGIN,
                point.y,
                &style.clone().max_width(Y_AXIS_WIDTH),
                theme.text,
            );
        }

        if point.x != ORIGIN_X {
            surface.stroke_line(
                (point.x, BASELINE_Y - TICK_LENGTH / 2.0),
                (point.x, BASELINE_Y + TICK_LENGTH / 2.0),
                theme.grades[3],
            );
        }

        surface.fill_text(
            &year.year,
            point.x - 13.0,
            BASELINE_Y + TICK_LENGTH / 2.0 + 50.0,
            &style,
            theme.text,
        );
        surface.fill_rect(point.x - 5.0, point.y, 10.0, 10.0, theme.grades[1]);
    }

    if points.len() > 1 {
        let line: Vec<(f32, f32)> = points.iter().map(|p| (p.x, p.y + 5.0)).collect();
        surface.stroke_polyline(&line, theme.grades[1]);
    }
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, theme: &Theme, style: &TextStyle) {
    surface.stroke_line(
        (ORIGIN_X, 70.0),
        (ORIGIN_X, BASELINE_Y + 15.0),
        theme.grades[4],
    );
    surface.stroke_line(
        (Y_AXIS_WIDTH + 5.0, BASELINE_Y),
        (category_span(), BASELINE_Y),
        theme.grades[4],
    );
    surface.fill_text(
        "contributions",
        CANVAS_MARGIN - 15.0,
        LINE_CHART_HEIGHT / 2.0 + 70.0,
        &style.clone().rotated(),
        theme.text,
    );
}
