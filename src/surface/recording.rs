// In-memory surface that records every draw call
// Lets tests assert on exact geometry without decoding pixels

use super::{Surface, TextStyle};
use crate::models::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize {
        width: u32,
        height: u32,
    },
    Scale(f32),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Every text string drawn, in call order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position and colour of every filled rectangle
    pub fn rects(&self) -> Vec<(f32, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { x, y, color, .. } => Some((*x, *y, *color)),
                _ => None,
            })
            .collect()
    }

    /// Endpoints and colour of every straight line
    pub fn lines(&self) -> Vec<((f32, f32), (f32, f32), Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    /// Last resize, if any
    pub fn size(&self) -> Option<(u32, u32)> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Resize { width, height } => Some((*width, *height)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.ops.clear();
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn set_scale(&mut self, factor: f32) {
        self.ops.push(DrawOp::Scale(factor));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
            color,
        });
    }
}
