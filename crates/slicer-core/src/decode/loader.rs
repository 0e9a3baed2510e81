//! Raster image decoding with format detection.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use log::info;

use super::{DecodeError, LoadedImage};

/// Decode an image from bytes, guessing the format from its magic bytes.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if no supported format matches.
/// Returns `DecodeError::CorruptedFile` if the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        image::ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(LoadedImage::new(img))
}

/// Load an image from disk.
///
/// The returned image remembers its path so exported slices can be named
/// after the source file.
pub fn load_image(path: impl AsRef<Path>) -> Result<LoadedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| DecodeError::IoError(e.to_string()))?;
    let image = decode_image(&bytes)?.with_source(path);

    info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}
