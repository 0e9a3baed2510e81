//! Draw commands for the display surface.
//!
//! The core never paints. It describes what should be on screen as a list
//! of primitives tagged by [`Layer`], and the surface clears and redraws one
//! layer at a time. Committed cut lines and the hover preview live on
//! separate layers so moving the pointer never touches the committed lines.

use crate::viewport::Viewport;

/// Category a draw command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The dashed line following the pointer.
    Preview,
    /// Committed cut lines and their labels.
    CutLines,
}

/// Named colors used by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

/// A single primitive, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        layer: Layer,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: Color,
        width: u32,
        dashed: bool,
    },
    Text {
        layer: Layer,
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::Line { layer, .. } | DrawCommand::Text { layer, .. } => *layer,
        }
    }
}

/// Red line plus `y=` label for each committed cut row.
///
/// Labels sit `label_offset` pixels right of and above their line.
pub fn cut_line_commands<I>(lines: I, viewport: &Viewport, label_offset: f64) -> Vec<DrawCommand>
where
    I: IntoIterator<Item = u32>,
{
    let right = viewport.display_width as f64;
    lines
        .into_iter()
        .flat_map(|y| {
            let display_y = viewport.display_y(y);
            [
                DrawCommand::Line {
                    layer: Layer::CutLines,
                    x0: 0.0,
                    y0: display_y,
                    x1: right,
                    y1: display_y,
                    color: Color::Red,
                    width: 2,
                    dashed: false,
                },
                DrawCommand::Text {
                    layer: Layer::CutLines,
                    x: label_offset,
                    y: display_y - label_offset,
                    text: format!("y={y}"),
                    color: Color::Red,
                },
            ]
        })
        .collect()
}

/// Dashed preview line at a canvas point, or nothing off the image.
pub fn preview_commands(canvas_x: f64, canvas_y: f64, viewport: &Viewport) -> Vec<DrawCommand> {
    if !viewport.contains(canvas_x, canvas_y) {
        return Vec::new();
    }
    vec![DrawCommand::Line {
        layer: Layer::Preview,
        x0: 0.0,
        y0: canvas_y,
        x1: viewport.display_width as f64,
        y1: canvas_y,
        color: Color::Blue,
        width: 1,
        dashed: true,
    }]
}
