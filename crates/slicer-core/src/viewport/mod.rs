//! Mapping between original-image space and display space.
//!
//! The image is shown scaled to fit the available display width and never
//! upsampled. Only the vertical axis matters for cut lines, so the mapping
//! functions work on `y` alone; horizontal positions are only used for the
//! bounds check.
//!
//! # Coordinate System
//!
//! - Original space: integer pixel rows `0..=height` of the loaded image
//! - Display space: `original * factor`, origin at the top-left of the
//!   rendered image
//! - Canvas space: display space plus the current scroll offset, which is
//!   what pointer events report after scrolling

mod mapping;
mod preview;

pub use mapping::{is_within_image, scale_factor, to_display, to_original, Viewport};
pub use preview::render_preview;
