//! Image loading for the slicer.
//!
//! This module provides functionality for:
//! - Decoding raster images (PNG, JPEG, BMP, GIF, TIFF, WebP) from bytes
//! - Loading an image from disk while remembering where it came from
//!
//! The decoded pixels are kept in their native color type so that exported
//! slices have the same depth and alpha as the source.
//!
//! # Examples
//!
//! ```ignore
//! use slicer_core::decode::load_image;
//!
//! let image = load_image("long_screenshot.png").unwrap();
//! println!("Loaded {}x{} image", image.width, image.height);
//! ```

mod loader;
mod types;

pub use loader::{decode_image, load_image};
pub use types::{DecodeError, FilterType, LoadedImage};
