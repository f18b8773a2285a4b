//! Image file formats for rendered barcodes.

use crate::error::BarcodeError;
use image::{DynamicImage, GrayImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Raster format of a saved or served barcode image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Gif,
    Jpeg,
}

impl OutputFormat {
    /// Format for a file extension. Unknown extensions fall back to PNG.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "gif" => Self::Gif,
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Png,
        }
    }

    /// Format for a file path, from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// MIME type for a `Content-Type` header.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Encode a grayscale image in the given format.
pub fn encode_image(image: &GrayImage, format: OutputFormat) -> Result<Vec<u8>, BarcodeError> {
    let gray = DynamicImage::ImageLuma8(image.clone());
    // The GIF encoder only accepts RGB(A) input
    let dynamic = match format {
        OutputFormat::Gif => DynamicImage::ImageRgba8(gray.to_rgba8()),
        OutputFormat::Png | OutputFormat::Jpeg => gray,
    };

    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, format.image_format())
        .map_err(|e| BarcodeError::Image(format!("failed to encode {:?}: {}", format, e)))?;
    Ok(buffer.into_inner())
}
