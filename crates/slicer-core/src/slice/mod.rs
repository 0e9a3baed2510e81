//! Partitioning an image into horizontal strips and writing them out.
//!
//! Slicing always goes top to bottom. The implicit boundaries `0` and
//! `image_height` are always present, equal neighbours are collapsed and
//! zero-height pairs are dropped, so every emitted strip is non-empty and
//! together they cover the image exactly once.
//!
//! # Pipeline
//!
//! 1. [`compute_boundaries`] turns the cut rows into `[top, bottom)` pairs
//! 2. [`crop_rows`] copies one full-width band out of the source
//! 3. [`slice_and_export`] encodes each band as PNG and writes it to disk

mod boundaries;
mod crop;
mod export;

pub use boundaries::{compute_boundaries, SliceBounds};
pub use crop::crop_rows;
pub use export::{slice_and_export, slice_file_name, slice_row, ExportReport, SliceRecord};
