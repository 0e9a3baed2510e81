//! Session settings.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Default width available for the rendered image, in display pixels.
pub const DEFAULT_DISPLAY_WIDTH: f64 = 800.0;

/// Settings that shape a slicing session.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Width available for the rendered image (display pixels).
    pub display_width: f64,
    /// Permit exporting with no cut lines (one slice spanning the image).
    pub allow_uncut_export: bool,
    /// Resampling filter for the display preview.
    pub preview_filter: FilterType,
    /// Offset of cut-line labels from the left edge and above the line.
    pub label_offset: f64,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            allow_uncut_export: false,
            preview_filter: FilterType::Lanczos3,
            label_offset: 10.0,
        }
    }
}
