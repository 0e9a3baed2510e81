//! Pure coordinate conversions and the per-image viewport.

/// Scale factor that fits `image_width` into `available_width`.
///
/// Capped at 1.0 so the preview is never upsampled. A zero-width image maps
/// 1:1, and a non-positive available width is treated as a single pixel so
/// the factor stays positive.
pub fn scale_factor(image_width: u32, available_width: f64) -> f64 {
    if image_width == 0 {
        return 1.0;
    }
    let available = if available_width.is_finite() {
        available_width.max(1.0)
    } else {
        1.0
    };
    (available / image_width as f64).min(1.0)
}

/// Original-space row to display-space y.
#[inline]
pub fn to_display(original_y: u32, factor: f64) -> f64 {
    original_y as f64 * factor
}

/// Display-space y to original-space row, truncating toward zero.
///
/// Negative or non-finite input saturates to row 0.
#[inline]
pub fn to_original(display_y: f64, factor: f64) -> u32 {
    let original = (display_y / factor).floor();
    if !original.is_finite() || original <= 0.0 {
        0
    } else {
        original as u32
    }
}

/// Inclusive bounds check against the rendered image.
///
/// The bottom and right edges are accepted, so a click exactly on the bottom
/// edge yields a cut at the image height, which slicing later drops as a
/// zero-height slice.
pub fn is_within_image(x: f64, y: f64, display_width: f64, display_height: f64) -> bool {
    (0.0..=display_width).contains(&x) && (0.0..=display_height).contains(&y)
}

/// Current mapping for a loaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Display pixels per original pixel (0 < factor <= 1).
    pub factor: f64,
    /// Width of the rendered image in display pixels.
    pub display_width: u32,
    /// Height of the rendered image in display pixels.
    pub display_height: u32,
    /// Horizontal scroll offset in display pixels.
    pub scroll_x: f64,
    /// Vertical scroll offset in display pixels.
    pub scroll_y: f64,
    /// Size of the visible area, used to clamp scrolling.
    pub visible_width: f64,
    pub visible_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            factor: 1.0,
            display_width: 0,
            display_height: 0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            visible_width: 0.0,
            visible_height: 0.0,
        }
    }
}

impl Viewport {
    /// Fit an image of the given size into the available display width.
    ///
    /// Scroll offsets are reset to the top-left.
    pub fn fit(image_width: u32, image_height: u32, available_width: f64) -> Self {
        let factor = scale_factor(image_width, available_width);
        Self {
            factor,
            display_width: (image_width as f64 * factor) as u32,
            display_height: (image_height as f64 * factor) as u32,
            visible_width: available_width.max(0.0),
            ..Self::default()
        }
    }

    /// Set the visible area height (the canvas height) for scroll clamping.
    pub fn with_visible_height(mut self, height: f64) -> Self {
        self.visible_height = height.max(0.0);
        self.clamp_scroll();
        self
    }

    /// Translate a pointer position on the surface into canvas coordinates.
    pub fn canvas_point(&self, event_x: f64, event_y: f64) -> (f64, f64) {
        (event_x + self.scroll_x, event_y + self.scroll_y)
    }

    /// Whether a canvas point lies on the rendered image.
    pub fn contains(&self, canvas_x: f64, canvas_y: f64) -> bool {
        is_within_image(
            canvas_x,
            canvas_y,
            self.display_width as f64,
            self.display_height as f64,
        )
    }

    /// Canvas y to original row.
    pub fn original_y(&self, canvas_y: f64) -> u32 {
        to_original(canvas_y, self.factor)
    }

    /// Original row to canvas y.
    pub fn display_y(&self, original_y: u32) -> f64 {
        to_display(original_y, self.factor)
    }

    /// Scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll();
    }

    /// Scroll by a relative amount, clamped to the scrollable range.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_to(self.scroll_x + dx, self.scroll_y + dy);
    }

    fn clamp_scroll(&mut self) {
        let max_x = (self.display_width as f64 - self.visible_width).max(0.0);
        let max_y = (self.display_height as f64 - self.visible_height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_downscales() {
        let f = scale_factor(3000, 1000.0);
        assert!((f - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_factor_never_upsamples() {
        assert_eq!(scale_factor(400, 800.0), 1.0);
        assert_eq!(scale_factor(800, 800.0), 1.0);
    }

    #[test]
    fn test_scale_factor_degenerate_inputs() {
        assert_eq!(scale_factor(0, 800.0), 1.0);
        assert!(scale_factor(1000, 0.0) > 0.0);
        assert!(scale_factor(1000, -50.0) > 0.0);
        assert!(scale_factor(1000, f64::NAN) > 0.0);
    }

    #[test]
    fn test_click_maps_to_original_row() {
        let f = scale_factor(3000, 1000.0);
        let y = to_original(100.0, f);
        assert!((299..=301).contains(&y), "got {y}");
    }

    #[test]
    fn test_to_original_truncates() {
        assert_eq!(to_original(10.9, 1.0), 10);
        assert_eq!(to_original(10.9, 0.5), 21);
    }

    #[test]
    fn test_to_original_negative_saturates() {
        assert_eq!(to_original(-3.0, 0.5), 0);
    }

    #[test]
    fn test_to_original_non_finite_is_row_zero() {
        assert_eq!(to_original(f64::INFINITY, 0.5), 0);
        assert_eq!(to_original(f64::NEG_INFINITY, 0.5), 0);
        assert_eq!(to_original(f64::NAN, 0.5), 0);
        assert_eq!(to_original(100.0, 0.0), 0);
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display(300, 0.5), 150.0);
        assert_eq!(to_display(0, 0.25), 0.0);
    }

    #[test]
    fn test_bounds_check_is_inclusive() {
        assert!(is_within_image(0.0, 0.0, 100.0, 500.0));
        assert!(is_within_image(100.0, 500.0, 100.0, 500.0));
        assert!(!is_within_image(100.5, 10.0, 100.0, 500.0));
        assert!(!is_within_image(10.0, 500.1, 100.0, 500.0));
        assert!(!is_within_image(-0.1, 10.0, 100.0, 500.0));
    }

    #[test]
    fn test_viewport_fit_truncates_display_size() {
        let vp = Viewport::fit(1600, 10001, 800.0);
        assert_eq!(vp.factor, 0.5);
        assert_eq!(vp.display_width, 800);
        assert_eq!(vp.display_height, 5000);
    }

    #[test]
    fn test_viewport_fit_small_image() {
        let vp = Viewport::fit(500, 2000, 800.0);
        assert_eq!(vp.factor, 1.0);
        assert_eq!((vp.display_width, vp.display_height), (500, 2000));
    }

    #[test]
    fn test_canvas_point_adds_scroll() {
        let mut vp = Viewport::fit(800, 4000, 800.0).with_visible_height(600.0);
        vp.scroll_to(0.0, 1200.0);
        assert_eq!(vp.canvas_point(15.0, 40.0), (15.0, 1240.0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut vp = Viewport::fit(800, 4000, 800.0).with_visible_height(600.0);
        vp.scroll_by(0.0, 10_000.0);
        assert_eq!(vp.scroll_y, 3400.0);
        vp.scroll_by(0.0, -99_999.0);
        assert_eq!(vp.scroll_y, 0.0);
        vp.scroll_by(50.0, 0.0);
        assert_eq!(vp.scroll_x, 0.0);
    }

    #[test]
    fn test_viewport_round_trip() {
        let vp = Viewport::fit(1600, 9000, 800.0);
        assert_eq!(vp.original_y(vp.display_y(4321)), 4321);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
