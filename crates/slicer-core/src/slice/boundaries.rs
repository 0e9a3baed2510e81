//! Boundary computation from cut rows.

/// A `[top, bottom)` row range of the original image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliceBounds {
    pub top: u32,
    pub bottom: u32,
}

impl SliceBounds {
    pub fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }

    /// Number of rows in the range.
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Compute the non-degenerate slice ranges for a set of cut rows.
///
/// Builds `{0, image_height} ∪ lines`, sorts and deduplicates it, then emits
/// each consecutive pair with a positive height. Rows past `image_height`
/// are clamped to it and therefore collapse into the bottom boundary.
/// The input does not need to be sorted.
pub fn compute_boundaries<I>(lines: I, image_height: u32) -> Vec<SliceBounds>
where
    I: IntoIterator<Item = u32>,
{
    let mut points: Vec<u32> = lines
        .into_iter()
        .map(|y| y.min(image_height))
        .chain([0, image_height])
        .collect();
    points.sort_unstable();
    points.dedup();

    points
        .windows(2)
        .map(|pair| SliceBounds::new(pair[0], pair[1]))
        .filter(|bounds| bounds.height() > 0)
        .collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
