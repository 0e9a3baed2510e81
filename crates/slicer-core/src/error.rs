//! Top-level error type for session and slicing operations.
//!
//! Codec modules keep their own error enums (`DecodeError`, `EncodeError`);
//! everything that reaches the application shell is folded into
//! [`SlicerError`] so a single message can be shown to the user.

use std::path::PathBuf;
use thiserror::Error;

use crate::decode::DecodeError;

/// Why an export request was refused before any file was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No image has been loaded yet.
    NoImage,
    /// The image is loaded but no cut line has been placed.
    NoCutLines,
    /// Every boundary pair collapsed to zero height.
    NothingToExport,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            EmptyReason::NoImage => "no image loaded",
            EmptyReason::NoCutLines => "no cut lines defined",
            EmptyReason::NothingToExport => "nothing to export",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the slicer core.
#[derive(Debug, Error)]
pub enum SlicerError {
    /// The source image could not be loaded.
    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    /// A removal targeted a row that is not in the sorted view.
    #[error("Cut line index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Cropping, encoding or writing a slice failed.
    #[error("Failed to write {}: {reason}", path.display())]
    IoFailure { path: PathBuf, reason: String },

    /// Export was requested without anything to slice.
    #[error("Cannot export: {0}")]
    EmptyOperation(EmptyReason),
}

/// Convenience result type for slicer operations.
pub type SlicerResult<T> = Result<T, SlicerError>;

impl SlicerError {
    pub fn io_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::IoFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
