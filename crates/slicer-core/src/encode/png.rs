//! PNG encoding for export.
//!
//! Uses the `image` crate's PNG encoder. 8- and 16-bit gray, gray+alpha, RGB
//! and RGBA are written as-is; floating point images are narrowed to 16-bit
//! RGBA first since PNG has no float sample format.

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder};
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an image to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty image and
/// `EncodeError::EncodingFailed` if the encoder rejects the data.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let narrowed;
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            narrowed = DynamicImage::ImageRgba16(image.to_rgba16());
            &narrowed
        }
        other => other,
    };

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(image.as_bytes(), width, height, image.color().into())
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
