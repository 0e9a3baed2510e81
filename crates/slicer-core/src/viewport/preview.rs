//! Scaled preview generation for the display surface.
//!
//! The preview is what the surface blits; cut lines are drawn on top of it
//! in the same display space. The source image is never modified.

use image::DynamicImage;

use super::Viewport;
use crate::decode::{FilterType, LoadedImage};

/// Resize the source image to the viewport's display size.
///
/// Returns a clone when the viewport is 1:1. A viewport that would collapse
/// the image to zero pixels in either direction is rounded up to one pixel.
pub fn render_preview(
    image: &LoadedImage,
    viewport: &Viewport,
    filter: FilterType,
) -> DynamicImage {
    let width = viewport.display_width.max(1);
    let height = viewport.display_height.max(1);

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return image.pixels.clone();
    }

    image
        .pixels
        .resize_exact(width, height, filter.to_image_filter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn create_test_image(width: u32, height: u32) -> LoadedImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
            ])
        });
        LoadedImage::new(DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn test_preview_downscales_to_viewport() {
        let img = create_test_image(1200, 3000);
        let vp = Viewport::fit(img.width, img.height, 600.0);
        let preview = render_preview(&img, &vp, FilterType::Bilinear);

        assert_eq!(preview.width(), 600);
        assert_eq!(preview.height(), 1500);
    }

    #[test]
    fn test_preview_identity_when_fits() {
        let img = create_test_image(300, 900);
        let vp = Viewport::fit(img.width, img.height, 800.0);
        let preview = render_preview(&img, &vp, FilterType::Lanczos3);

        assert_eq!(preview.to_rgb8(), img.pixels.to_rgb8());
    }

    #[test]
    fn test_preview_never_zero_sized() {
        let img = create_test_image(4000, 2);
        let vp = Viewport::fit(img.width, img.height, 100.0);
        assert_eq!(vp.display_height, 0);

        let preview = render_preview(&img, &vp, FilterType::Nearest);
        assert_eq!(preview.width(), 100);
        assert_eq!(preview.height(), 1);
    }

    #[test]
    fn test_preview_keeps_color_type() {
        let img = LoadedImage::new(DynamicImage::ImageRgba8(image::RgbaImage::new(200, 200)));
        let vp = Viewport::fit(200, 200, 100.0);
        let preview = render_preview(&img, &vp, FilterType::Lanczos3);
        assert!(preview.color().has_alpha());
    }
}
