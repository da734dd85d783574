// Drawing surface abstraction
// The renderers only talk to this trait; raster output and the test recorder implement it

pub mod raster;
pub mod recording;

pub use raster::RasterSurface;
pub use recording::{DrawOp, RecordingSurface};

use crate::models::Color;

/// Where the `y` coordinate of a text call sits relative to the glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// `y` is the top of the text
    #[default]
    Hanging,
    /// `y` is the bottom of the text
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    /// Text reads bottom to top, starting at the anchor point
    CounterClockwise90,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels
    pub size: f32,
    pub font_face: String,
    pub baseline: Baseline,
    pub rotation: Rotation,
    /// Maximum advance width; wider text is squeezed horizontally to fit
    pub max_width: Option<f32>,
}

impl TextStyle {
    pub fn new(size: f32, font_face: &str) -> Self {
        Self {
            size,
            font_face: font_face.to_string(),
            baseline: Baseline::Hanging,
            rotation: Rotation::None,
            max_width: None,
        }
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotated(mut self) -> Self {
        self.rotation = Rotation::CounterClockwise90;
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Primitive 2D drawing operations in logical (unscaled) coordinates
pub trait Surface {
    /// Resize the backing store to `width` x `height` device pixels.
    /// Clears the surface and resets the scale to 1.
    fn resize(&mut self, width: u32, height: u32);

    /// Replace the logical-to-device scale factor
    fn set_scale(&mut self, factor: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// One pixel wide straight line
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color);

    /// Connected line through `points`, in order
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], color);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color);
}
