//! TTF text for captions and the human-readable code line.
//!
//! Glyphs are laid out on a single line with ab_glyph and drawn straight
//! onto the grayscale image, darkening pixels by their coverage.

use crate::error::BarcodeError;
use ab_glyph::{Font, FontArc, ScaleFont};
use image::{GrayImage, Luma};
use std::fmt;
use std::path::{Path, PathBuf};

/// A font loaded from disk.
#[derive(Clone)]
pub struct CaptionFont {
    path: PathBuf,
    font: FontArc,
}

impl fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptionFont")
            .field("path", &self.path)
            .finish()
    }
}

/// Size of a rendered line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
}

impl CaptionFont {
    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BarcodeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| BarcodeError::Font(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_bytes(bytes, path)
    }

    /// Parse font data already in memory; `origin` is kept for diagnostics.
    pub fn from_bytes(bytes: Vec<u8>, origin: impl AsRef<Path>) -> Result<Self, BarcodeError> {
        let origin = origin.as_ref();
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| BarcodeError::Font(format!("invalid font {}: {}", origin.display(), e)))?;
        Ok(Self {
            path: origin.to_path_buf(),
            font,
        })
    }

    /// Measure `text` at `pixel_height`.
    pub fn measure(&self, text: &str, pixel_height: f32) -> TextMetrics {
        let scaled = self.font.as_scaled(pixel_height);
        let advance: f32 = text
            .chars()
            .map(|ch| scaled.h_advance(self.font.glyph_id(ch)))
            .sum();

        TextMetrics {
            width: advance.ceil() as u32,
            height: (scaled.ascent() - scaled.descent()).ceil().max(1.0) as u32,
        }
    }

    /// Largest pixel size, at least 1, at which `text` is narrower than `max_width`.
    pub fn fit_size(&self, text: &str, max_width: u32, max_size: u32) -> u32 {
        let mut size = 1;
        while size < max_size && self.measure(text, (size + 1) as f32).width < max_width {
            size += 1;
        }
        size
    }

    /// Draw `text` with its left edge at `x` and the top of the line at `top`.
    pub fn draw(&self, image: &mut GrayImage, text: &str, pixel_height: f32, x: i32, top: i32) {
        let scaled = self.font.as_scaled(pixel_height);
        let baseline = top as f32 + scaled.ascent();
        let mut caret = x as f32;
        let (width, height) = (image.width() as i32, image.height() as i32);

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            let glyph =
                glyph_id.with_scale_and_position(pixel_height, ab_glyph::point(caret, baseline));
            caret += scaled.h_advance(glyph_id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounds.min.x as i32;
                let py = gy as i32 + bounds.min.y as i32;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let ink = 255 - (coverage.clamp(0.0, 1.0) * 255.0) as u8;
                let pixel = image.get_pixel_mut(px as u32, py as u32);
                *pixel = Luma([pixel[0].min(ink)]);
            });
        }
    }
}
