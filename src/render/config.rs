//! # Render Configuration
//!
//! Image geometry and text options for drawing a barcode.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────┐ ─┐
//! │ border + spacing                 │  │
//! │          caption (optional)      │  │
//! │ ▌▌ ▌▌▌ ▌ ▌▌ ▌ ▌▌▌ ▌▌ ▌ ▌ ▌▌▌ ▌▌  │  height
//! │ ▌▌ ▌▌▌ ▌ ▌▌ ▌ ▌▌▌ ▌▌ ▌ ▌ ▌▌▌ ▌▌  │  │
//! │          code text (optional)    │  │
//! │ border + spacing                 │  │
//! └──────────────────────────────────┘ ─┘
//! ```
//!
//! Width is not configurable: it follows from the module count, the module
//! width and the frame (border width + border spacing) on both sides.
//!
//! Every setter validates its input and returns an error instead of
//! storing a bad value.

use super::font::CaptionFont;
use crate::error::BarcodeError;
use std::path::Path;

/// Settings used by [`render`](super::render).
///
/// ## Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | height | 150 px |
/// | module width | 1 px |
/// | border width | 2 px |
/// | border spacing | 10 px |
/// | text spacing | 5 px |
/// | show code | yes |
/// | fit font | no |
/// | font size | 10 px |
#[derive(Debug, Clone)]
pub struct RenderConfig {
    height: u32,
    module_width: u32,
    border_width: u32,
    border_spacing: u32,
    text_spacing: u32,
    show_code: bool,
    fit_font: bool,
    caption: Option<String>,
    font: Option<CaptionFont>,
    font_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: 150,
            module_width: 1,
            border_width: 2,
            border_spacing: 10,
            text_spacing: 5,
            show_code: true,
            fit_font: false,
            caption: None,
            font: None,
            font_size: 10,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the image height. Must be greater than zero and leave at least
    /// one row inside the frame.
    pub fn set_height(&mut self, px: i64) -> Result<(), BarcodeError> {
        let height = positive("height", px)?;
        fits_frame("height", px, height, self.border_width, self.border_spacing)?;
        self.height = height;
        Ok(())
    }

    /// Width of one module in pixels.
    pub fn module_width(&self) -> u32 {
        self.module_width
    }

    /// Set the module width. Must be one or more.
    pub fn set_module_width(&mut self, px: i64) -> Result<(), BarcodeError> {
        self.module_width = positive("module width", px)?;
        Ok(())
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Set the border line width. Zero disables the border.
    pub fn set_border_width(&mut self, px: i64) -> Result<(), BarcodeError> {
        let width = non_negative("border width", px)?;
        fits_frame("border width", px, self.height, width, self.border_spacing)?;
        self.border_width = width;
        Ok(())
    }

    pub fn border_spacing(&self) -> u32 {
        self.border_spacing
    }

    /// Set the gap between the border and the content.
    pub fn set_border_spacing(&mut self, px: i64) -> Result<(), BarcodeError> {
        let spacing = non_negative("border spacing", px)?;
        fits_frame("border spacing", px, self.height, self.border_width, spacing)?;
        self.border_spacing = spacing;
        Ok(())
    }

    pub fn text_spacing(&self) -> u32 {
        self.text_spacing
    }

    /// Set the gap between the bars and the caption or code text.
    pub fn set_text_spacing(&mut self, px: i64) -> Result<(), BarcodeError> {
        self.text_spacing = non_negative("text spacing", px)?;
        Ok(())
    }

    /// Border width plus border spacing, the blank frame on each side.
    pub fn frame(&self) -> u32 {
        self.border_width.saturating_add(self.border_spacing)
    }

    /// Whether the encoded text is printed under the bars.
    pub fn show_code(&self) -> bool {
        self.show_code
    }

    pub fn set_show_code(&mut self, show: bool) {
        self.show_code = show;
    }

    /// Whether the code text size is shrunk or grown to fit the bar width.
    pub fn fit_font(&self) -> bool {
        self.fit_font
    }

    pub fn set_fit_font(&mut self, fit: bool) {
        self.fit_font = fit;
    }

    /// Caption printed above the bars.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Set the caption. Surrounding whitespace is trimmed; blank clears it.
    pub fn set_caption(&mut self, text: &str) {
        let trimmed = text.trim();
        self.caption = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn font(&self) -> Option<&CaptionFont> {
        self.font.as_ref()
    }

    /// Font size in pixels.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Load a TrueType/OpenType font for the caption and code text.
    ///
    /// Text is only drawn when a font is set.
    pub fn set_font(&mut self, path: impl AsRef<Path>, size: i64) -> Result<(), BarcodeError> {
        let size = positive("font size", size)?;
        self.font = Some(CaptionFont::load(path)?);
        self.font_size = size;
        Ok(())
    }

    /// Use a font that is already loaded.
    pub fn set_loaded_font(&mut self, font: CaptionFont, size: i64) -> Result<(), BarcodeError> {
        self.font_size = positive("font size", size)?;
        self.font = Some(font);
        Ok(())
    }

    /// Builder form of [`set_caption`](Self::set_caption).
    pub fn with_caption(mut self, text: &str) -> Self {
        self.set_caption(text);
        self
    }
}

fn positive(name: &'static str, value: i64) -> Result<u32, BarcodeError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(BarcodeError::InvalidDimension {
            name,
            requirement: "greater than zero",
            value,
        }),
    }
}

/// The frame on both sides must leave at least one row of the image.
fn fits_frame(
    name: &'static str,
    value: i64,
    height: u32,
    border_width: u32,
    border_spacing: u32,
) -> Result<(), BarcodeError> {
    let frame = u64::from(border_width) + u64::from(border_spacing);
    if u64::from(height) > 2 * frame {
        return Ok(());
    }
    Err(BarcodeError::InvalidDimension {
        name,
        requirement: "height larger than twice the border width plus spacing",
        value,
    })
}

fn non_negative(name: &'static str, value: i64) -> Result<u32, BarcodeError> {
    u32::try_from(value).map_err(|_| BarcodeError::InvalidDimension {
        name,
        requirement: "zero or more",
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.height(), 150);
        assert_eq!(config.module_width(), 1);
        assert_eq!(config.frame(), 12);
        assert_eq!(config.text_spacing(), 5);
        assert!(config.show_code());
        assert!(!config.fit_font());
        assert!(config.caption().is_none());
        assert!(config.font().is_none());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = RenderConfig::default();
        assert!(config.set_height(0).is_err());
        assert!(config.set_height(-5).is_err());
        assert!(config.set_module_width(0).is_err());
        assert!(config.set_border_width(-1).is_err());
        assert!(config.set_border_spacing(-1).is_err());
        assert!(config.set_text_spacing(-1).is_err());

        // Rejected values leave the old ones in place
        assert_eq!(config.height(), 150);
        assert_eq!(config.module_width(), 1);
        assert_eq!(config.border_width(), 2);
    }

    #[test]
    fn test_height_must_exceed_frame() {
        let mut config = RenderConfig::default();
        // default frame is 12 px on each side
        let err = config.set_height(24).unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidDimension { name: "height", .. }));
        assert!(config.set_height(20).is_err());
        assert_eq!(config.height(), 150);

        config.set_height(25).unwrap();
        assert_eq!(config.height(), 25);
    }

    #[test]
    fn test_frame_setters_respect_height() {
        let mut config = RenderConfig::default();
        config.set_height(40).unwrap();

        // 2 + 18 = 20, twice that is the full height
        assert!(config.set_border_spacing(18).is_err());
        assert_eq!(config.border_spacing(), 10);
        config.set_border_spacing(17).unwrap();

        assert!(config.set_border_width(3).is_err());
        assert!(config.set_border_width(i64::from(u32::MAX)).is_err());
        assert_eq!(config.border_width(), 2);
        assert_eq!(config.frame(), 19);
    }

    #[test]
    fn test_accepts_zero_frame() {
        let mut config = RenderConfig::default();
        config.set_border_width(0).unwrap();
        config.set_border_spacing(0).unwrap();
        assert_eq!(config.frame(), 0);
    }

    #[test]
    fn test_caption_trimmed() {
        let config = RenderConfig::new().with_caption("  Order 42 \n");
        assert_eq!(config.caption(), Some("Order 42"));

        let config = config.with_caption("   ");
        assert_eq!(config.caption(), None);
    }

    #[test]
    fn test_missing_font_is_validation_error() {
        let mut config = RenderConfig::default();
        let err = config.set_font("/nonexistent/font.ttf", 12).unwrap_err();
        assert!(err.is_validation());
        assert!(config.font().is_none());

        let err = config.set_font("/nonexistent/font.ttf", 0).unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidDimension { .. }));
    }
}
