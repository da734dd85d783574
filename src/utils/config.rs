// Centralized configuration for contrib-canvas
// Layout constants shared by both charts, plus value parsing for the CLI

use crate::error::{ChartError, Result};

/// Date format used by the contributions feed
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Font family used when the caller does not pick one
pub const DEFAULT_FONT_FACE: &str = "IBM Plex Mono";

/// Theme used when the requested name is missing or unknown
pub const DEFAULT_THEME: &str = "standard";

/// Number of colour grades in a theme ramp (intensity 0..=4)
pub const GRADE_COUNT: usize = 5;

// Heatmap geometry
pub const BOX_WIDTH: f32 = 10.0;
pub const BOX_MARGIN: f32 = 2.0;
pub const TEXT_HEIGHT: f32 = 15.0;
pub const HEADER_HEIGHT: f32 = 60.0;
pub const CANVAS_MARGIN: f32 = 20.0;
/// Widest possible year in weeks; every canvas is this wide
pub const WEEK_COLUMNS: usize = 53;
pub const YEAR_HEIGHT: f32 = TEXT_HEIGHT + (BOX_WIDTH + BOX_MARGIN) * 8.0 + CANVAS_MARGIN;

// Trend line geometry
pub const LINE_CHART_HEIGHT: f32 = 500.0;
pub const X_AXIS_HEIGHT: f32 = 50.0;
pub const Y_AXIS_WIDTH: f32 = 50.0;
pub const TICK_LENGTH: f32 = 30.0;

/// Width shared by both charts
pub fn canvas_width() -> f32 {
    WEEK_COLUMNS as f32 * (BOX_WIDTH + BOX_MARGIN) + CANVAS_MARGIN * 2.0
}

/// Parse a device pixel ratio (`--scale` / `CONTRIB_SCALE`)
pub fn parse_scale(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ChartError::Config(format!("scale is not a number: {}", raw)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::Config(format!("scale must be positive: {}", raw)));
    }
    Ok(value)
}
