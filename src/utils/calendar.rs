// Calendar helpers for the heatmap grid
// Weeks run Saturday through Friday; row 0 of the grid is always a Saturday

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::config::DATE_FORMAT;

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Most recent Saturday on or before `date` (the date itself if it is a Saturday)
pub fn saturday_on_or_before(date: NaiveDate) -> NaiveDate {
    let days_back = (date.weekday().num_days_from_sunday() + 1) % 7;
    date - Duration::days(days_back as i64)
}

/// Date `offset` days into the week that starts on `week_start`
pub fn shift_within_week(week_start: NaiveDate, offset: usize) -> NaiveDate {
    week_start + Duration::days((offset % 7) as i64)
}

/// Step one week forward
pub fn next_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(7)
}

/// Weekday shown on grid row `row`
///
/// Rows run Saturday first (row 0) then Sunday through Friday. This is the
/// intended layout, not an off-by-one from a Sunday-first calendar: a January 1
/// on a Saturday then sits in column 0 instead of falling off the grid.
pub fn row_weekday(row: usize) -> Weekday {
    let mut day = Weekday::Sat;
    for _ in 0..(row % 7) {
        day = day.succ();
    }
    day
}

/// Three-letter month label ("Jan", "Feb", ...)
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
