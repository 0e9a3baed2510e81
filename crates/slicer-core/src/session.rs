//! Application state for one slicing session.
//!
//! [`SliceSession`] owns the loaded image, the cut-line set and the current
//! viewport. The shell holds one and calls into it for every user action;
//! each call returns what changed (the new line, the derived views) and the
//! shell decides how to repaint. Pointer handling is split into a pure
//! coordinate step (`viewport`) followed by a pure set insert (`cut_lines`).

use std::path::Path;

use image::DynamicImage;
use log::{info, warn};

use crate::config::SlicerConfig;
use crate::cut_lines::CutLineSet;
use crate::decode::{load_image, LoadedImage};
use crate::error::{EmptyReason, SlicerError, SlicerResult};
use crate::overlay::{cut_line_commands, preview_commands, DrawCommand};
use crate::slice::{compute_boundaries, slice_and_export, ExportReport, SliceBounds};
use crate::viewport::{render_preview, Viewport};

/// Prompt shown before any image is loaded.
pub const IDLE_STATUS: &str = "Select an image to begin";

/// Result of a click or a direct insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No image is loaded; the event was ignored.
    NoImage,
    /// The point was off the rendered image; the event was ignored.
    OutsideImage,
    /// A new cut line was added at this original row.
    Added(u32),
    /// The row already had a cut line; nothing changed.
    Duplicate(u32),
}

/// Mutable state of the slicer, independent of any UI toolkit.
#[derive(Debug, Clone, Default)]
pub struct SliceSession {
    image: Option<LoadedImage>,
    cut_lines: CutLineSet,
    viewport: Viewport,
    config: SlicerConfig,
}

impl SliceSession {
    pub fn new(config: SlicerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cut_lines(&self) -> &CutLineSet {
        &self.cut_lines
    }

    /// Load an image from disk, replacing the current one.
    ///
    /// On failure the session is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> SlicerResult<&LoadedImage> {
        let image = load_image(path)?;
        Ok(self.set_image(image))
    }

    /// Install an already decoded image. Clears all cut lines.
    pub fn set_image(&mut self, image: LoadedImage) -> &LoadedImage {
        self.viewport = Viewport::fit(image.width, image.height, self.config.display_width)
            .with_visible_height(self.viewport.visible_height);
        self.cut_lines.clear();
        self.image.insert(image)
    }

    /// Change the width available for the rendered image and refit.
    pub fn set_available_width(&mut self, width: f64) {
        self.config.display_width = width;
        self.refit();
    }

    /// Change the visible canvas height, which bounds vertical scrolling.
    pub fn set_visible_height(&mut self, height: f64) {
        self.viewport = self.viewport.with_visible_height(height);
    }

    /// Scroll the canvas by a number of display pixels.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.viewport.scroll_by(dx, dy);
    }

    fn refit(&mut self) {
        if let Some(image) = &self.image {
            self.viewport = Viewport::fit(image.width, image.height, self.config.display_width)
                .with_visible_height(self.viewport.visible_height);
        }
    }

    /// Handle a click at a pointer position reported by the surface.
    pub fn click(&mut self, event_x: f64, event_y: f64) -> ClickOutcome {
        if self.image.is_none() {
            return ClickOutcome::NoImage;
        }
        let (x, y) = self.viewport.canvas_point(event_x, event_y);
        if !self.viewport.contains(x, y) {
            return ClickOutcome::OutsideImage;
        }
        let original_y = self.viewport.original_y(y);
        self.insert(original_y)
    }

    /// Add a cut line directly in original-image rows.
    pub fn add_cut_line(&mut self, y: u32) -> ClickOutcome {
        match &self.image {
            None => ClickOutcome::NoImage,
            Some(image) if y > image.height => {
                warn!("Ignoring cut at y={} outside image height {}", y, image.height);
                ClickOutcome::OutsideImage
            }
            Some(_) => self.insert(y),
        }
    }

    fn insert(&mut self, y: u32) -> ClickOutcome {
        if self.cut_lines.insert(y) {
            ClickOutcome::Added(y)
        } else {
            ClickOutcome::Duplicate(y)
        }
    }

    /// Preview-layer commands for the pointer position.
    pub fn hover(&self, event_x: f64, event_y: f64) -> Vec<DrawCommand> {
        if self.image.is_none() {
            return Vec::new();
        }
        let (x, y) = self.viewport.canvas_point(event_x, event_y);
        preview_commands(x, y, &self.viewport)
    }

    /// Remove the line at a row of the list view.
    pub fn remove_at(&mut self, index: usize) -> SlicerResult<u32> {
        self.cut_lines.remove_at(index)
    }

    pub fn clear(&mut self) {
        self.cut_lines.clear();
    }

    /// Ascending cut rows.
    pub fn lines(&self) -> Vec<u32> {
        self.cut_lines.sorted_lines()
    }

    pub fn list_labels(&self) -> Vec<String> {
        self.cut_lines.list_labels()
    }

    /// Slice ranges that an export would produce right now.
    pub fn boundaries(&self) -> Vec<SliceBounds> {
        match &self.image {
            Some(image) => compute_boundaries(self.cut_lines.iter(), image.height),
            None => Vec::new(),
        }
    }

    /// Cut-line layer commands for the current set.
    pub fn cut_line_commands(&self) -> Vec<DrawCommand> {
        if self.image.is_none() {
            return Vec::new();
        }
        cut_line_commands(self.cut_lines.iter(), &self.viewport, self.config.label_offset)
    }

    /// Scaled image for the display surface.
    pub fn preview(&self) -> Option<DynamicImage> {
        self.image
            .as_ref()
            .map(|image| render_preview(image, &self.viewport, self.config.preview_filter))
    }

    /// One-line description of the loaded image.
    pub fn status_line(&self) -> String {
        match &self.image {
            Some(image) => format!(
                "Loaded: {} ({}x{})",
                image.file_name().unwrap_or_else(|| image.base_name()),
                image.width,
                image.height
            ),
            None => IDLE_STATUS.to_string(),
        }
    }

    /// Why [`export`](Self::export) would be refused right now, if it would.
    pub fn export_blocker(&self) -> Option<EmptyReason> {
        let Some(image) = &self.image else {
            return Some(EmptyReason::NoImage);
        };
        if image.is_empty() {
            return Some(EmptyReason::NothingToExport);
        }
        if self.cut_lines.is_empty() && !self.config.allow_uncut_export {
            return Some(EmptyReason::NoCutLines);
        }
        None
    }

    /// Write every slice into `destination`.
    ///
    /// Preconditions are checked before any file is touched.
    pub fn export(&self, destination: &Path) -> SlicerResult<ExportReport> {
        let image = self
            .image
            .as_ref()
            .ok_or(SlicerError::EmptyOperation(EmptyReason::NoImage))?;

        if let Some(reason) = self.export_blocker() {
            return Err(SlicerError::EmptyOperation(reason));
        }

        let boundaries = self.boundaries();
        if boundaries.is_empty() {
            return Err(SlicerError::EmptyOperation(EmptyReason::NothingToExport));
        }

        info!(
            "Exporting {} slice(s) at cuts {:?}",
            boundaries.len(),
            self.lines()
        );
        slice_and_export(image, &boundaries, destination, &image.base_name())
    }
}
