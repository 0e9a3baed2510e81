//! Full-width row band cropping.

use image::DynamicImage;

use super::SliceBounds;

/// Copy the rows `[top, bottom)` of an image at full width.
///
/// Ranges reaching past the bottom are clamped by the image crate, so the
/// result is never larger than the source. The source is left untouched.
pub fn crop_rows(image: &DynamicImage, bounds: SliceBounds) -> DynamicImage {
    image.crop_imm(0, bounds.top, image.width(), bounds.height())
}
