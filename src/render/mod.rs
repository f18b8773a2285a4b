//! # Rendering Module
//!
//! Draws an [`EncodedSymbolStream`] as a grayscale raster image.
//!
//! Rendering is a separate stage from encoding: nothing here changes which
//! symbols are produced, only how they are laid out.
//!
//! ## Modules
//!
//! - [`config`]: image geometry and text options
//! - [`font`]: TTF caption and code-text drawing
//! - [`output`]: PNG/GIF/JPEG encoding
//!
//! ## Usage Example
//!
//! ```no_run
//! use barcode128::render::{Barcode, OutputFormat};
//!
//! let mut barcode = Barcode::new("http://am-wd.de")?;
//! barcode.config_mut().set_height(130)?;
//! barcode.config_mut().set_module_width(2)?;
//!
//! // Write a file (format from extension)...
//! barcode.save("barcode.gif")?;
//!
//! // ...or get the bytes for an HTTP response
//! let body = barcode.to_bytes(OutputFormat::Png)?;
//! let content_type = OutputFormat::Png.content_type();
//! # Ok::<(), barcode128::BarcodeError>(())
//! ```

pub mod config;
pub mod font;
pub mod output;

pub use config::RenderConfig;
pub use font::{CaptionFont, TextMetrics};
pub use output::{OutputFormat, encode_image};

use crate::encoder::{EncodedSymbolStream, encode};
use crate::error::BarcodeError;
use image::{GrayImage, Luma};
use std::path::Path;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

/// A line of text placed in the image.
struct TextLine<'a> {
    text: &'a str,
    size: f32,
    metrics: TextMetrics,
    top: u32,
}

/// Image width in pixels: modules times module width plus the frame on both sides.
///
/// Fails when the result does not fit in a `u32`.
pub fn image_width(
    stream: &EncodedSymbolStream,
    config: &RenderConfig,
) -> Result<u32, BarcodeError> {
    let modules = u32::try_from(stream.width()).ok();
    modules
        .and_then(|m| m.checked_mul(config.module_width()))
        .and_then(|w| config.frame().checked_mul(2)?.checked_add(w))
        .ok_or(BarcodeError::InvalidDimension {
            name: "module width",
            requirement: "small enough for the image width to fit in 32 bits",
            value: i64::from(config.module_width()),
        })
}

/// Draw `stream` using `config`.
///
/// Every `1` module becomes a black column `module_width` pixels wide. The
/// caption and code text are only drawn when the config has a font.
pub fn render(
    stream: &EncodedSymbolStream,
    config: &RenderConfig,
) -> Result<GrayImage, BarcodeError> {
    let frame = config.frame();
    let module_width = config.module_width();
    let width = image_width(stream, config)?;
    let height = config.height();
    let spacing = config.text_spacing();

    let mut bar_top = frame;
    let mut bar_bottom = height.saturating_sub(frame);

    let caption = match (config.font(), config.caption()) {
        (Some(font), Some(text)) => {
            let size = config.font_size() as f32;
            let metrics = font.measure(text, size);
            bar_top = bar_top.saturating_add(metrics.height).saturating_add(spacing);
            Some(TextLine {
                text,
                size,
                metrics,
                top: frame,
            })
        }
        _ => None,
    };

    let code = match config.font() {
        Some(font) if config.show_code() && !stream.text().is_empty() => {
            let text = stream.text();
            let size = if config.fit_font() {
                let margin = frame.saturating_add(spacing).saturating_mul(2);
                let available = width.saturating_sub(margin).max(1);
                font.fit_size(text, available, height) as f32
            } else {
                config.font_size() as f32
            };
            let metrics = font.measure(text, size);
            let top = bar_bottom.saturating_sub(metrics.height);
            bar_bottom = top.saturating_sub(spacing);
            Some(TextLine {
                text,
                size,
                metrics,
                top,
            })
        }
        _ => None,
    };

    if bar_bottom <= bar_top {
        return Err(BarcodeError::InvalidDimension {
            name: "height",
            requirement: "large enough to fit the frame, text and bars",
            value: height as i64,
        });
    }

    let mut image = GrayImage::from_pixel(width, height, WHITE);
    draw_border(&mut image, config.border_width());

    for (index, is_bar) in stream.modules().enumerate() {
        if !is_bar {
            continue;
        }
        let x0 = frame + index as u32 * module_width;
        for x in x0..x0 + module_width {
            for y in bar_top..bar_bottom {
                image.put_pixel(x, y, BLACK);
            }
        }
    }

    if let Some(font) = config.font() {
        for line in caption.iter().chain(code.iter()) {
            let x = width.saturating_sub(line.metrics.width) / 2;
            font.draw(&mut image, line.text, line.size, x as i32, line.top as i32);
        }
    }

    tracing::debug!(width, height, bar_top, bar_bottom, "rendered barcode");
    Ok(image)
}

/// Nested one-pixel frames, outermost first.
fn draw_border(image: &mut GrayImage, border_width: u32) {
    let (width, height) = image.dimensions();
    for inset in 0..border_width {
        if 2 * inset >= width || 2 * inset >= height {
            break;
        }
        let (left, right) = (inset, width - 1 - inset);
        let (top, bottom) = (inset, height - 1 - inset);
        for x in left..=right {
            image.put_pixel(x, top, BLACK);
            image.put_pixel(x, bottom, BLACK);
        }
        for y in top..=bottom {
            image.put_pixel(left, y, BLACK);
            image.put_pixel(right, y, BLACK);
        }
    }
}

/// An encoded barcode together with its render settings.
#[derive(Debug, Clone)]
pub struct Barcode {
    stream: EncodedSymbolStream,
    config: RenderConfig,
}

impl Barcode {
    /// Encode `text` with the default render settings.
    pub fn new(text: &str) -> Result<Self, BarcodeError> {
        Self::with_config(text, RenderConfig::default())
    }

    pub fn with_config(text: &str, config: RenderConfig) -> Result<Self, BarcodeError> {
        Ok(Self {
            stream: encode(text)?,
            config,
        })
    }

    pub fn stream(&self) -> &EncodedSymbolStream {
        &self.stream
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Replace the encoded text. On error the previous text is kept.
    pub fn set_text(&mut self, text: &str) -> Result<(), BarcodeError> {
        self.stream = encode(text)?;
        Ok(())
    }

    /// Image width in pixels for the current text and settings.
    pub fn width(&self) -> Result<u32, BarcodeError> {
        image_width(&self.stream, &self.config)
    }

    pub fn render(&self) -> Result<GrayImage, BarcodeError> {
        render(&self.stream, &self.config)
    }

    /// Rendered image encoded as `format`.
    pub fn to_bytes(&self, format: OutputFormat) -> Result<Vec<u8>, BarcodeError> {
        encode_image(&self.render()?, format)
    }

    /// Render and write to `path`, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BarcodeError> {
        let path = path.as_ref();
        let bytes = self.to_bytes(OutputFormat::from_path(path))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
