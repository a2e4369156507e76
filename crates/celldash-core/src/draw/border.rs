//! Rectangular borders with an optional title.

use super::line::{draw_hv_lines, HvLine, HvLineOptions, LineStyle};
use super::text::{draw_text, OverrunMode, TextOptions};
use super::Align;
use crate::canvas::CellCanvas;
use crate::cell::CellStyle;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::rune::text_width;

/// Options for [`draw_border`].
#[derive(Debug, Clone, Default)]
pub struct BorderOptions {
    /// Visual style of the border lines.
    pub line_style: LineStyle,
    /// Cell style of the border lines.
    pub style: CellStyle,
    /// Title overlaid on the top edge.
    pub title: Option<String>,
    /// Title alignment along the top edge.
    pub title_align: Align,
    /// Overrun policy when the title does not fit.
    pub title_overrun: OverrunMode,
    /// Cell style of the title.
    pub title_style: CellStyle,
}

impl BorderOptions {
    /// Create default options: a light border with no title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line style.
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the border cell style.
    #[must_use]
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Overlay a title on the top edge.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title alignment.
    #[must_use]
    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    /// Set the title overrun policy.
    #[must_use]
    pub fn with_title_overrun(mut self, overrun: OverrunMode) -> Self {
        self.title_overrun = overrun;
        self
    }

    /// Set the title cell style.
    #[must_use]
    pub fn with_title_style(mut self, style: CellStyle) -> Self {
        self.title_style = style;
        self
    }
}

/// Draw a rectangular border just inside `area`, then overlay the title (if
/// any) along the top edge between the corners.
///
/// The area must be at least 2×2 cells. A title that cannot fit under
/// [`OverrunMode::Strict`] is [`Error::Overflow`].
pub fn draw_border(canvas: &mut CellCanvas, area: Rect, options: &BorderOptions) -> Result<()> {
    if area.width < 2 || area.height < 2 {
        return Err(Error::invalid_argument(format!(
            "border area {area:?} must be at least 2x2 cells"
        )));
    }
    if !canvas.area().contains_rect(&area) {
        return Err(Error::OutOfBounds {
            point: area.origin(),
            area: canvas.area(),
        });
    }

    let top_left = area.origin();
    let top_right = Point::new(area.right() - 1, area.y);
    let bottom_left = Point::new(area.x, area.bottom() - 1);
    let bottom_right = Point::new(area.right() - 1, area.bottom() - 1);

    let lines = [
        HvLine::new(top_left, top_right),
        HvLine::new(bottom_left, bottom_right),
        HvLine::new(top_left, bottom_left),
        HvLine::new(top_right, bottom_right),
    ];
    let line_opts = HvLineOptions::new()
        .with_line_style(options.line_style)
        .with_style(options.style);
    draw_hv_lines(canvas, &lines, &line_opts)?;

    if let Some(title) = &options.title {
        draw_title(canvas, area, title, options)?;
    }
    Ok(())
}

fn draw_title(
    canvas: &mut CellCanvas,
    area: Rect,
    title: &str,
    options: &BorderOptions,
) -> Result<()> {
    // The span between the two corner cells.
    let span_start = area.x + 1;
    let span_width = area.width - 2;
    let needed = text_width(title);

    if span_width < 1 {
        return if options.title_overrun == OverrunMode::Strict {
            Err(Error::Overflow {
                width: needed,
                available: span_width,
            })
        } else {
            Ok(())
        };
    }

    let start_x = options.title_align.start(span_start, span_width, needed);
    let text_opts = TextOptions::new()
        .with_max_x(span_start + span_width)
        .with_overrun(options.title_overrun)
        .with_style(options.title_style);
    draw_text(canvas, title, Point::new(start_x, area.y), &text_opts)
}
