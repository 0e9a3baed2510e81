//! Slicer Core - cut-line model and horizontal slicing for tall images
//!
//! This crate holds everything about slicing that does not depend on a UI:
//! the ordered set of cut rows, the mapping between original-image and
//! display coordinates, boundary computation, and the crop/encode/write
//! export loop. A shell (GUI or CLI) owns a [`SliceSession`] and feeds it
//! pointer events and commands.
//!
//! # Module Structure
//!
//! - `decode` - Image loading (format detection, source path tracking)
//! - `encode` - PNG encoding of slices
//! - `viewport` - Scale factor and original/display coordinate mapping
//! - `cut_lines` - Ordered, duplicate-free cut-row set
//! - `slice` - Boundary computation and export
//! - `overlay` - Layer-tagged draw commands for the display surface
//! - `session` - Application state tying the above together

pub mod config;
pub mod cut_lines;
pub mod decode;
pub mod encode;
pub mod error;
pub mod overlay;
pub mod session;
pub mod slice;
pub mod viewport;

pub use config::SlicerConfig;
pub use cut_lines::CutLineSet;
pub use decode::{load_image, LoadedImage};
pub use error::{EmptyReason, SlicerError, SlicerResult};
pub use session::{ClickOutcome, SliceSession};
pub use slice::{
    compute_boundaries, slice_and_export, slice_row, ExportReport, SliceBounds, SliceRecord,
};
pub use viewport::{is_within_image, scale_factor, to_display, to_original, Viewport};
