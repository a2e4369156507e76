//! Text drawing with overrun policies.

use crate::canvas::CellCanvas;
use crate::cell::{Cell, CellStyle};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::rune::{rune_width, text_width, ELLIPSIS_RUNE};
use serde::{Deserialize, Serialize};

/// What to do with text that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverrunMode {
    /// Any overflow is an error, including a full-width rune that would
    /// straddle the limit.
    #[default]
    Strict,
    /// Stop at the last rune that fully fits; a straddling full-width rune
    /// is dropped rather than half-drawn.
    Trim,
    /// Like [`Trim`](Self::Trim), but the first cell that would have
    /// exceeded the limit is replaced by `…`.
    ThreeDot,
}

/// Options for [`draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Exclusive column bound; defaults to the canvas right edge.
    pub max_x: Option<i32>,
    /// Overrun policy.
    pub overrun: OverrunMode,
    /// Style applied to every drawn cell.
    pub style: CellStyle,
}

impl TextOptions {
    /// Create default options: strict overrun up to the canvas edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound drawing at the given exclusive column.
    #[must_use]
    pub const fn with_max_x(mut self, max_x: i32) -> Self {
        self.max_x = Some(max_x);
        self
    }

    /// Set the overrun policy.
    #[must_use]
    pub const fn with_overrun(mut self, overrun: OverrunMode) -> Self {
        self.overrun = overrun;
        self
    }

    /// Set the cell style.
    #[must_use]
    pub const fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// Options for [`draw_vertical_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalTextOptions {
    /// Exclusive row bound; defaults to the canvas bottom edge.
    pub max_y: Option<i32>,
    /// Overrun policy.
    pub overrun: OverrunMode,
    /// Style applied to every drawn cell.
    pub style: CellStyle,
}

impl VerticalTextOptions {
    /// Create default options: strict overrun up to the canvas edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound drawing at the given exclusive row.
    #[must_use]
    pub const fn with_max_y(mut self, max_y: i32) -> Self {
        self.max_y = Some(max_y);
        self
    }

    /// Set the overrun policy.
    #[must_use]
    pub const fn with_overrun(mut self, overrun: OverrunMode) -> Self {
        self.overrun = overrun;
        self
    }

    /// Set the cell style.
    #[must_use]
    pub const fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// Draw `text` left to right from `start`.
///
/// The limit is `max_x` clamped to the canvas right edge. Under
/// [`OverrunMode::Strict`] the whole string must fit or nothing is drawn.
pub fn draw_text(
    canvas: &mut CellCanvas,
    text: &str,
    start: Point,
    options: &TextOptions,
) -> Result<()> {
    let area = canvas.area();
    if !area.contains(start) {
        return Err(Error::OutOfBounds { point: start, area });
    }
    let limit = options
        .max_x
        .map_or(area.right(), |max_x| max_x.min(area.right()));

    if options.overrun == OverrunMode::Strict {
        let needed = text_width(text);
        let available = limit - start.x;
        if needed > available {
            return Err(Error::Overflow {
                width: needed,
                available,
            });
        }
    }

    let mut x = start.x;
    for rune in text.chars() {
        let width = rune_width(rune);
        if x + width > limit {
            if options.overrun == OverrunMode::ThreeDot {
                place_ellipsis(canvas, Point::new(limit - 1, start.y), start.x, options.style)?;
            }
            return Ok(());
        }
        canvas.set_cell(Point::new(x, start.y), rune, options.style)?;
        x += width;
    }
    Ok(())
}

/// Draw `text` top to bottom from `start`.
///
/// The same contract as [`draw_text`] with y-growth replacing x: each rune
/// advances by as many rows as its cell width, so the strict fit law holds
/// for full-width runes in both orientations.
pub fn draw_vertical_text(
    canvas: &mut CellCanvas,
    text: &str,
    start: Point,
    options: &VerticalTextOptions,
) -> Result<()> {
    let area = canvas.area();
    if !area.contains(start) {
        return Err(Error::OutOfBounds { point: start, area });
    }
    let limit = options
        .max_y
        .map_or(area.bottom(), |max_y| max_y.min(area.bottom()));

    if options.overrun == OverrunMode::Strict {
        let needed = text_width(text);
        let available = limit - start.y;
        if needed > available {
            return Err(Error::Overflow {
                width: needed,
                available,
            });
        }
    }

    let mut y = start.y;
    for rune in text.chars() {
        let width = rune_width(rune);
        if y + width > limit {
            if options.overrun == OverrunMode::ThreeDot {
                place_ellipsis_at(canvas, Point::new(start.x, limit - 1), start.y, options.style)?;
            }
            return Ok(());
        }
        canvas.set_cell(Point::new(start.x, y), rune, options.style)?;
        y += width;
    }
    Ok(())
}

/// Overwrite the cell at `position` with `…`.
///
/// A raw write: when the overflow lands mid-full-width-rune, the pair's
/// trailer cell is the one replaced.
fn place_ellipsis(
    canvas: &mut CellCanvas,
    position: Point,
    min_x: i32,
    style: CellStyle,
) -> Result<()> {
    if position.x < min_x || !canvas.area().contains(position) {
        return Ok(());
    }
    canvas.put_cell(position, Cell::new(ELLIPSIS_RUNE, style))
}

fn place_ellipsis_at(
    canvas: &mut CellCanvas,
    position: Point,
    min_y: i32,
    style: CellStyle,
) -> Result<()> {
    if position.y < min_y || !canvas.area().contains(position) {
        return Ok(());
    }
    canvas.put_cell(position, Cell::new(ELLIPSIS_RUNE, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use proptest::prelude::*;

    fn canvas(w: i32, h: i32) -> CellCanvas {
        CellCanvas::from_size(Size::new(w, h)).unwrap()
    }

    fn row(cvs: &CellCanvas, y: i32) -> String {
        (0..cvs.area().width)
            .map(|x| cvs.cell(Point::new(x, y)).unwrap().rune)
            .collect()
    }

    #[test]
    fn test_strict_fits() {
        let mut cvs = canvas(5, 1);
        draw_text(&mut cvs, "abc", Point::ORIGIN, &TextOptions::new()).unwrap();
        assert_eq!(row(&cvs, 0), "abc  ");
    }

    #[test]
    fn test_strict_overflow_draws_nothing() {
        let mut cvs = canvas(2, 1);
        let result = draw_text(&mut cvs, "abc", Point::ORIGIN, &TextOptions::new());
        assert!(matches!(result, Err(Error::Overflow { .. })));
        assert_eq!(row(&cvs, 0), "  ");
    }

    #[test]
    fn test_strict_full_width_straddle_is_overflow() {
        let mut cvs = canvas(3, 1);
        let result = draw_text(&mut cvs, "a世b", Point::ORIGIN, &TextOptions::new());
        assert!(matches!(
            result,
            Err(Error::Overflow {
                width: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn test_trim_stops_at_limit() {
        let mut cvs = canvas(2, 1);
        let opts = TextOptions::new().with_overrun(OverrunMode::Trim);
        draw_text(&mut cvs, "abc", Point::ORIGIN, &opts).unwrap();
        assert_eq!(row(&cvs, 0), "ab");
    }

    #[test]
    fn test_trim_drops_straddling_full_width_rune() {
        let mut cvs = canvas(1, 1);
        let opts = TextOptions::new().with_overrun(OverrunMode::Trim);
        draw_text(&mut cvs, "世", Point::ORIGIN, &opts).unwrap();
        assert_eq!(row(&cvs, 0), " ");
    }

    #[test]
    fn test_three_dot_replaces_last_cell() {
        let mut cvs = canvas(2, 1);
        let opts = TextOptions::new().with_overrun(OverrunMode::ThreeDot);
        draw_text(&mut cvs, "abc", Point::ORIGIN, &opts).unwrap();
        assert_eq!(row(&cvs, 0), "a…");
    }

    #[test]
    fn test_three_dot_exact_fit_unchanged() {
        let mut cvs = canvas(3, 1);
        let opts = TextOptions::new().with_overrun(OverrunMode::ThreeDot);
        draw_text(&mut cvs, "abc", Point::ORIGIN, &opts).unwrap();
        assert_eq!(row(&cvs, 0), "abc");
    }

    #[test]
    fn test_three_dot_replaces_trailer_of_full_width_rune() {
        let mut cvs = canvas(2, 1);
        let opts = TextOptions::new().with_overrun(OverrunMode::ThreeDot);
        draw_text(&mut cvs, "世b", Point::ORIGIN, &opts).unwrap();

        // The pair fit exactly; the following rune overflowed onto the
        // trailer cell, which is replaced.
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().rune, '世');
        assert_eq!(cvs.cell(Point::new(1, 0)).unwrap().rune, '…');
    }

    #[test]
    fn test_max_x_bounds_before_canvas_edge() {
        let mut cvs = canvas(6, 1);
        let opts = TextOptions::new()
            .with_max_x(3)
            .with_overrun(OverrunMode::ThreeDot);
        draw_text(&mut cvs, "abcdef", Point::ORIGIN, &opts).unwrap();
        assert_eq!(row(&cvs, 0), "ab…   ");
    }

    #[test]
    fn test_start_outside_canvas_fails() {
        let mut cvs = canvas(3, 1);
        let result = draw_text(&mut cvs, "a", Point::new(0, 2), &TextOptions::new());
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_text_with_offset_start() {
        let mut cvs = canvas(5, 2);
        draw_text(&mut cvs, "hi", Point::new(2, 1), &TextOptions::new()).unwrap();
        assert_eq!(row(&cvs, 1), "  hi ");
    }

    #[test]
    fn test_vertical_strict_fits() {
        let mut cvs = canvas(1, 3);
        draw_vertical_text(&mut cvs, "abc", Point::ORIGIN, &VerticalTextOptions::new()).unwrap();
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().rune, 'a');
        assert_eq!(cvs.cell(Point::new(0, 1)).unwrap().rune, 'b');
        assert_eq!(cvs.cell(Point::new(0, 2)).unwrap().rune, 'c');
    }

    #[test]
    fn test_vertical_strict_overflow() {
        let mut cvs = canvas(1, 2);
        let result =
            draw_vertical_text(&mut cvs, "abc", Point::ORIGIN, &VerticalTextOptions::new());
        assert!(matches!(result, Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_vertical_three_dot() {
        let mut cvs = canvas(1, 2);
        let opts = VerticalTextOptions::new().with_overrun(OverrunMode::ThreeDot);
        draw_vertical_text(&mut cvs, "abc", Point::ORIGIN, &opts).unwrap();
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().rune, 'a');
        assert_eq!(cvs.cell(Point::new(0, 1)).unwrap().rune, '…');
    }

    #[test]
    fn test_vertical_full_width_consumes_two_rows() {
        let mut cvs = canvas(2, 3);
        draw_vertical_text(&mut cvs, "世a", Point::ORIGIN, &VerticalTextOptions::new()).unwrap();
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().rune, '世');
        assert!(cvs.cell(Point::new(1, 0)).unwrap().is_trailer());
        assert_eq!(cvs.cell(Point::new(0, 2)).unwrap().rune, 'a');
    }

    proptest! {
        /// Trim and ThreeDot never draw outside the limit, even for strings
        /// containing full-width runes.
        #[test]
        fn prop_overrun_never_exceeds_limit(
            text in "[a-z世界]{0,12}",
            max_x in 1i32..8,
            three_dot in proptest::bool::ANY,
        ) {
            let mut cvs = canvas(8, 1);
            let overrun = if three_dot { OverrunMode::ThreeDot } else { OverrunMode::Trim };
            let opts = TextOptions::new().with_max_x(max_x).with_overrun(overrun);
            draw_text(&mut cvs, &text, Point::ORIGIN, &opts).unwrap();

            for x in max_x..8 {
                prop_assert_eq!(cvs.cell(Point::new(x, 0)).unwrap().rune, ' ');
            }
        }

        /// The strict fit law: drawing succeeds iff the text width fits.
        #[test]
        fn prop_strict_succeeds_iff_fits(text in "[a-z世]{0,10}", width in 1i32..12) {
            let mut cvs = canvas(width, 1);
            let result = draw_text(&mut cvs, &text, Point::ORIGIN, &TextOptions::new());
            let fits = text_width(&text) <= width;
            prop_assert_eq!(result.is_ok(), fits);
        }
    }
}
