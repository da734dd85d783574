// Calendar heatmap renderer
// One block per year: header line, month labels, then a square for every day with data

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use super::grid::CalendarGrid;
use super::RenderOptions;
use crate::models::{DatasetIndex, IndexedYear, Theme};
use crate::surface::{Surface, TextStyle};
use crate::utils::calendar::month_abbrev;
use crate::utils::config::{
    canvas_width, BOX_MARGIN, BOX_WIDTH, CANVAS_MARGIN, HEADER_HEIGHT, TEXT_HEIGHT, YEAR_HEIGHT,
};
use crate::utils::formatters::{format_number, pluralize};

/// Logical canvas size for `year_count` stacked years
pub fn canvas_size(year_count: usize) -> (f32, f32) {
    let height = year_count as f32 * YEAR_HEIGHT + CANVAS_MARGIN + HEADER_HEIGHT + 10.0;
    (canvas_width(), height)
}

/// Top-left corner of the block for the `i`th year
pub fn year_origin(i: usize) -> (f32, f32) {
    (CANVAS_MARGIN, YEAR_HEIGHT * i as f32 + CANVAS_MARGIN + HEADER_HEIGHT)
}

/// Top-left corner of the square for week `column`, weekday `row`
pub fn cell_origin(offset_x: f32, offset_y: f32, column: usize, row: usize) -> (f32, f32) {
    (
        offset_x + column as f32 * (BOX_WIDTH + BOX_MARGIN),
        offset_y + TEXT_HEIGHT + row as f32 * (BOX_WIDTH + BOX_MARGIN),
    )
}

/// "2021: 1,234 Contributions", with " (so far)" for the running year
///
/// `count` is the number shown; the plural follows the year's reported `total`.
pub fn header_text(year: &str, count: u64, total: u64, current: bool) -> String {
    format!(
        "{}: {} {}{}",
        year,
        format_number(count),
        pluralize("Contribution", total),
        if current { " (so far)" } else { "" }
    )
}

/// Last drawable day: today for the running year, the range end otherwise
pub fn cutoff_for(year: &IndexedYear<'_>, today: NaiveDate) -> NaiveDate {
    if year.number == today.year() {
        today
    } else {
        year.last_day
    }
}

pub(crate) fn draw_years<S: Surface + ?Sized>(
    surface: &mut S,
    options: &RenderOptions<'_>,
    index: &DatasetIndex<'_>,
) {
    let theme = options.theme();
    let style = TextStyle::new(10.0, options.face());

    for (i, year) in index.years().iter().enumerate() {
        let cutoff = cutoff_for(year, options.today);
        let grid = CalendarGrid::build(year, cutoff, index);
        let (offset_x, offset_y) = year_origin(i);
        let current = year.number == options.today.year();
        draw_year(surface, theme, &style, year, &grid, (offset_x, offset_y), current);
    }
}

fn draw_year<S: Surface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    style: &TextStyle,
    year: &IndexedYear<'_>,
    grid: &CalendarGrid<'_>,
    (offset_x, offset_y): (f32, f32),
    current: bool,
) {
    let count = grid.total();
    if count != year.source.total {
        warn!(
            "Year {} reports {} contributions but its days sum to {}",
            year.source.year, year.source.total, count
        );
    }
    debug!(
        "Drawing {} ({} weeks, cutoff {})",
        year.source.year,
        grid.columns(),
        grid.cutoff()
    );

    let header = header_text(&year.source.year, count, year.source.total, current);
    surface.fill_text(&header, offset_x, offset_y - 17.0, style, theme.text);

    for (row, column, contribution) in grid.drawable_cells() {
        let (x, y) = cell_origin(offset_x, offset_y, column, row);
        surface.fill_rect(x, y, BOX_WIDTH, BOX_WIDTH, theme.grade(contribution.intensity));
    }

    for label in grid.month_labels() {
        let x = offset_x + label.column as f32 * (BOX_WIDTH + BOX_MARGIN);
        surface.fill_text(&month_abbrev(label.date), x, offset_y, style, theme.meta);
    }
}
