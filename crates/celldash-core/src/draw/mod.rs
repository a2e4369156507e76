//! Drawing primitives on cell and braille canvases.

mod border;
mod circle;
mod line;
mod text;

pub use border::{draw_border, BorderOptions};
pub use circle::{draw_braille_circle, CircleOptions};
pub use line::{draw_hv_lines, HvLine, HvLineOptions, LineStyle};
pub use text::{draw_text, draw_vertical_text, OverrunMode, TextOptions, VerticalTextOptions};

use crate::canvas::CellCanvas;
use crate::cell::CellStyle;
use crate::error::Result;
use crate::rune::RESIZE_MARKER_RUNE;
use serde::{Deserialize, Serialize};

/// Horizontal alignment within a span of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center within the span.
    Center,
    /// Align to the right edge.
    Right,
}

impl Align {
    /// Starting column for content of `content_width` cells inside the span
    /// `[span_start, span_start + span_width)`. Content wider than the span
    /// starts at the span's left edge.
    #[must_use]
    pub const fn start(self, span_start: i32, span_width: i32, content_width: i32) -> i32 {
        let slack = span_width - content_width;
        let slack = if slack < 0 { 0 } else { slack };
        match self {
            Self::Left => span_start,
            Self::Center => span_start + slack / 2,
            Self::Right => span_start + slack,
        }
    }
}

/// Draw the resize marker: a single `⇄` in the center of the canvas.
///
/// Drawn by the infrastructure when a widget's canvas is below the widget's
/// declared minimum size.
pub fn draw_resize_marker(canvas: &mut CellCanvas) -> Result<()> {
    canvas.set_cell(canvas.area().center(), RESIZE_MARKER_RUNE, CellStyle::new())?;
    Ok(())
}
