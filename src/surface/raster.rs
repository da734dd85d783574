// Raster surface backed by an RGBA image buffer
// Shapes are drawn with imageproc, text with ab_glyph fonts registered by face name

use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::imageops::{self, FilterType};
use image::{ImageEncoder, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::debug;

use super::{Baseline, Rotation, Surface, TextStyle};
use crate::error::{ChartError, Result};
use crate::models::Color;

pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    fonts: HashMap<String, FontVec>,
    /// Face used when a requested face was never registered
    fallback_face: Option<String>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    pub fn new() -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            scale: 1.0,
            fonts: HashMap::new(),
            fallback_face: None,
        }
    }

    /// Register font bytes (TTF/OTF) under a face name.
    /// The first registered face also becomes the fallback.
    pub fn register_font(&mut self, face: &str, bytes: Vec<u8>) -> Result<()> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| ChartError::Font(format!("{}: {}", face, e)))?;
        self.fonts.insert(face.to_string(), font);
        if self.fallback_face.is_none() {
            self.fallback_face = Some(face.to_string());
        }
        Ok(())
    }

    pub fn load_font(&mut self, face: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = std::fs::read(path.as_ref())?;
        self.register_font(face, bytes)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encode the current buffer as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let (width, height) = self.image.dimensions();
        let mut png_bytes: Vec<u8> = Vec::new();
        {
            let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
            encoder
                .write_image(self.image.as_raw(), width, height, image::ExtendedColorType::Rgba8)
                .map_err(|e| ChartError::Encode(format!("{:?}", e)))?;
        }
        Ok(png_bytes)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn device(&self, v: f32) -> i32 {
        (v * self.scale).round() as i32
    }

    fn device_len(&self, v: f32) -> u32 {
        (v * self.scale).round().max(1.0) as u32
    }
}

/// Width to draw text of `natural` device pixels when it may not exceed `max`
fn fitted_width(natural: u32, max: Option<f32>) -> u32 {
    match max {
        Some(max) if (natural as f32) > max => (max.floor() as u32).max(1),
        _ => natural,
    }
}

fn lookup_font<'f>(
    fonts: &'f HashMap<String, FontVec>,
    fallback: Option<&str>,
    face: &str,
) -> Option<&'f FontVec> {
    fonts
        .get(face)
        .or_else(|| fallback.and_then(|name| fonts.get(name)))
}

impl Surface for RasterSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
        self.scale = 1.0;
    }

    fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let rect = Rect::at(self.device(x), self.device(y))
            .of_size(self.device_len(width), self.device_len(height));
        draw_filled_rect_mut(&mut self.image, rect, color);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        let s = self.scale;
        draw_line_segment_mut(
            &mut self.image,
            (from.0 * s, from.1 * s),
            (to.0 * s, to.1 * s),
            color,
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle, color: Color) {
        if text.is_empty() {
            return;
        }
        let x = self.device(x);
        let mut y = self.device(y);
        let Some(font) = lookup_font(&self.fonts, self.fallback_face.as_deref(), &style.font_face)
        else {
            debug!("No font registered for {:?}, skipping text {:?}", style.font_face, text);
            return;
        };

        let scale = PxScale::from(style.size * self.scale);
        let (text_width, text_height) = text_size(scale, font, text);
        if style.baseline == Baseline::Bottom {
            y -= text_height as i32;
        }

        let target_width = fitted_width(text_width, style.max_width.map(|w| w * self.scale));
        if style.rotation == Rotation::None && target_width == text_width {
            draw_text_mut(&mut self.image, color, x, y, scale, font, text);
            return;
        }

        let mut scratch = RgbaImage::new(text_width.max(1), text_height.max(1));
        draw_text_mut(&mut scratch, color, 0, 0, scale, font, text);
        if target_width < text_width {
            debug!("Condensing {:?} from {}px to {}px", text, text_width, target_width);
            scratch = imageops::resize(&scratch, target_width, scratch.height(), FilterType::Triangle);
        }

        match style.rotation {
            Rotation::None => imageops::overlay(&mut self.image, &scratch, x as i64, y as i64),
            Rotation::CounterClockwise90 => {
                // Glyph tops end up on the left edge, the first glyph at the bottom
                let rotated = imageops::rotate270(&scratch);
                imageops::overlay(
                    &mut self.image,
                    &rotated,
                    x as i64,
                    (y - scratch.width() as i32) as i64,
                );
            }
        }
    }
}
