//! Image encoding for slice export.
//!
//! This module provides functionality for:
//! - Encoding a slice to PNG bytes, keeping its color type where PNG allows
//!
//! Encoding happens in memory; writing the bytes to disk is the caller's job
//! so that write failures can be reported against the output path.
//!
//! # Examples
//!
//! ```ignore
//! use slicer_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&slice).unwrap();
//! std::fs::write("out_slice_01.png", png_bytes).unwrap();
//! ```

mod png;

pub use png::{encode_png, EncodeError};
