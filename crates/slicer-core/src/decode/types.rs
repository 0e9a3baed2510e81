//! Core types for image decoding.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Filter type for preview resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded source image.
///
/// Immutable once loaded; a new load replaces the whole value. Crops made
/// during export are independent copies.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Where the image was read from, if it came from disk.
    pub source: Option<PathBuf>,
    /// Decoded pixels in their native color type.
    pub pixels: DynamicImage,
}

impl LoadedImage {
    /// Wrap an in-memory image with no source path.
    pub fn new(pixels: DynamicImage) -> Self {
        Self {
            width: pixels.width(),
            height: pixels.height(),
            source: None,
            pixels,
        }
    }

    /// Attach the path the image was read from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Base name used for exported slice files: the source file stem.
    pub fn base_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "image".to_string())
    }

    /// File name of the source, for status messages.
    pub fn file_name(&self) -> Option<String> {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn blank(width: u32, height: u32) -> LoadedImage {
        LoadedImage::new(DynamicImage::ImageRgb8(RgbImage::new(width, height)))
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_default_filter_is_lanczos() {
        assert_eq!(FilterType::default(), FilterType::Lanczos3);
    }

    #[test]
    fn test_loaded_image_dimensions() {
        let img = blank(120, 4000);
        assert_eq!(img.width, 120);
        assert_eq!(img.height, 4000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_base_name_from_source() {
        let img = blank(10, 10).with_source("/shots/chat_log.final.png");
        assert_eq!(img.base_name(), "chat_log.final");
        assert_eq!(img.file_name().as_deref(), Some("chat_log.final.png"));
    }

    #[test]
    fn test_base_name_without_source() {
        let img = blank(10, 10);
        assert_eq!(img.base_name(), "image");
        assert_eq!(img.file_name(), None);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
