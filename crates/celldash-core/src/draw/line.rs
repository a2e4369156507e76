//! Horizontal and vertical lines with junction resolution.
//!
//! Segments are decomposed into unit half-edges between adjacent cells.
//! Cells shared by several segments accumulate an edge set; the junction
//! rune for a cell is looked up from the style's table keyed by that set, so
//! crossings become `┼`, T-junctions `┬┴├┤` and corners `┌┐└┘`.

use crate::canvas::CellCanvas;
use crate::cell::CellStyle;
use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge towards the cell above.
const EDGE_N: u8 = 0b0001;
/// Edge towards the cell to the right.
const EDGE_E: u8 = 0b0010;
/// Edge towards the cell below.
const EDGE_S: u8 = 0b0100;
/// Edge towards the cell to the left.
const EDGE_W: u8 = 0b1000;

/// Visual style of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    /// Thin solid line.
    #[default]
    Light,
    /// Thick solid line.
    Heavy,
    /// Double line.
    Double,
    /// Thin solid line with rounded corners.
    Round,
    /// Thin line with triple-dash strokes.
    DashedLight,
    /// Thin line with double-dash strokes.
    DoubleDash,
}

impl LineStyle {
    /// The straight rune for a horizontal or vertical run.
    #[must_use]
    pub const fn straight(self, horizontal: bool) -> char {
        match (self, horizontal) {
            (Self::Light | Self::Round, true) => '─',
            (Self::Light | Self::Round, false) => '│',
            (Self::Heavy, true) => '━',
            (Self::Heavy, false) => '┃',
            (Self::Double, true) => '═',
            (Self::Double, false) => '║',
            (Self::DashedLight, true) => '┄',
            (Self::DashedLight, false) => '┆',
            (Self::DoubleDash, true) => '╌',
            (Self::DoubleDash, false) => '╎',
        }
    }
}

/// The junction rune for a cell with the given edge set.
///
/// Only edge sets of two or more edges have junction runes; anything else is
/// [`Error::UnsupportedJunction`]. The dashed styles join with the light
/// junction runes.
fn junction_rune(style: LineStyle, edges: u8) -> Result<char> {
    let rune = match style {
        LineStyle::Light | LineStyle::DashedLight | LineStyle::DoubleDash => match edges {
            e if e == EDGE_E | EDGE_W => '─',
            e if e == EDGE_N | EDGE_S => '│',
            e if e == EDGE_S | EDGE_E => '┌',
            e if e == EDGE_S | EDGE_W => '┐',
            e if e == EDGE_N | EDGE_E => '└',
            e if e == EDGE_N | EDGE_W => '┘',
            e if e == EDGE_N | EDGE_E | EDGE_S => '├',
            e if e == EDGE_N | EDGE_W | EDGE_S => '┤',
            e if e == EDGE_E | EDGE_S | EDGE_W => '┬',
            e if e == EDGE_E | EDGE_N | EDGE_W => '┴',
            e if e == EDGE_N | EDGE_E | EDGE_S | EDGE_W => '┼',
            _ => return Err(Error::UnsupportedJunction { style, edges }),
        },
        LineStyle::Round => match edges {
            e if e == EDGE_E | EDGE_W => '─',
            e if e == EDGE_N | EDGE_S => '│',
            e if e == EDGE_S | EDGE_E => '╭',
            e if e == EDGE_S | EDGE_W => '╮',
            e if e == EDGE_N | EDGE_E => '╰',
            e if e == EDGE_N | EDGE_W => '╯',
            e if e == EDGE_N | EDGE_E | EDGE_S => '├',
            e if e == EDGE_N | EDGE_W | EDGE_S => '┤',
            e if e == EDGE_E | EDGE_S | EDGE_W => '┬',
            e if e == EDGE_E | EDGE_N | EDGE_W => '┴',
            e if e == EDGE_N | EDGE_E | EDGE_S | EDGE_W => '┼',
            _ => return Err(Error::UnsupportedJunction { style, edges }),
        },
        LineStyle::Heavy => match edges {
            e if e == EDGE_E | EDGE_W => '━',
            e if e == EDGE_N | EDGE_S => '┃',
            e if e == EDGE_S | EDGE_E => '┏',
            e if e == EDGE_S | EDGE_W => '┓',
            e if e == EDGE_N | EDGE_E => '┗',
            e if e == EDGE_N | EDGE_W => '┛',
            e if e == EDGE_N | EDGE_E | EDGE_S => '┣',
            e if e == EDGE_N | EDGE_W | EDGE_S => '┫',
            e if e == EDGE_E | EDGE_S | EDGE_W => '┳',
            e if e == EDGE_E | EDGE_N | EDGE_W => '┻',
            e if e == EDGE_N | EDGE_E | EDGE_S | EDGE_W => '╋',
            _ => return Err(Error::UnsupportedJunction { style, edges }),
        },
        LineStyle::Double => match edges {
            e if e == EDGE_E | EDGE_W => '═',
            e if e == EDGE_N | EDGE_S => '║',
            e if e == EDGE_S | EDGE_E => '╔',
            e if e == EDGE_S | EDGE_W => '╗',
            e if e == EDGE_N | EDGE_E => '╚',
            e if e == EDGE_N | EDGE_W => '╝',
            e if e == EDGE_N | EDGE_E | EDGE_S => '╠',
            e if e == EDGE_N | EDGE_W | EDGE_S => '╣',
            e if e == EDGE_E | EDGE_S | EDGE_W => '╦',
            e if e == EDGE_E | EDGE_N | EDGE_W => '╩',
            e if e == EDGE_N | EDGE_E | EDGE_S | EDGE_W => '╬',
            _ => return Err(Error::UnsupportedJunction { style, edges }),
        },
    };
    Ok(rune)
}

/// An axis-aligned line segment with inclusive cell endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HvLine {
    /// First endpoint.
    pub start: Point,
    /// Last endpoint.
    pub end: Point,
}

impl HvLine {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    fn normalized(&self) -> Result<(Point, Point, bool)> {
        if self.start.x != self.end.x && self.start.y != self.end.y {
            return Err(Error::invalid_argument(format!(
                "line from {:?} to {:?} is neither horizontal nor vertical",
                self.start, self.end
            )));
        }
        // A single-cell segment counts as vertical.
        let horizontal = self.start.y == self.end.y && self.start.x != self.end.x;
        let (start, end) = if (self.start.x, self.start.y) <= (self.end.x, self.end.y) {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        Ok((start, end, horizontal))
    }

    fn cells(start: Point, end: Point, horizontal: bool) -> Vec<Point> {
        if horizontal {
            (start.x..=end.x).map(|x| Point::new(x, start.y)).collect()
        } else {
            (start.y..=end.y).map(|y| Point::new(start.x, y)).collect()
        }
    }
}

/// Options for [`draw_hv_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HvLineOptions {
    /// Visual line style.
    pub line_style: LineStyle,
    /// Style applied to every drawn cell.
    pub style: CellStyle,
}

impl HvLineOptions {
    /// Create default options: light lines with default cell style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line style.
    #[must_use]
    pub const fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the cell style.
    #[must_use]
    pub const fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// Draw a set of axis-aligned lines, resolving junctions where they meet.
pub fn draw_hv_lines(
    canvas: &mut CellCanvas,
    lines: &[HvLine],
    options: &HvLineOptions,
) -> Result<()> {
    let mut edges: HashMap<Point, u8> = HashMap::new();

    for line in lines {
        let (start, end, horizontal) = line.normalized()?;
        let cells = HvLine::cells(start, end, horizontal);

        // First pass: every covered cell receives the straight rune.
        let straight = options.line_style.straight(horizontal);
        for &cell in &cells {
            canvas.set_cell(cell, straight, options.style)?;
        }

        // Accumulate the unit half-edges between adjacent cells.
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if horizontal {
                *edges.entry(a).or_default() |= EDGE_E;
                *edges.entry(b).or_default() |= EDGE_W;
            } else {
                *edges.entry(a).or_default() |= EDGE_S;
                *edges.entry(b).or_default() |= EDGE_N;
            }
        }
    }

    // Second pass: nodes with two or more incident edges get junction runes.
    for (&point, &edge_set) in &edges {
        if edge_set.count_ones() >= 2 {
            let rune = junction_rune(options.line_style, edge_set)?;
            canvas.set_cell(point, rune, options.style)?;
        }
    }
    Ok(())
}
