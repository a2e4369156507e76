//! Sub-cell pixel canvas built on Unicode braille patterns.
//!
//! Each terminal cell encodes a 2×4 pixel grid in one rune from the braille
//! patterns block (U+2800..=U+28FF), multiplying the effective resolution by
//! two horizontally and four vertically.

use crate::canvas::CellCanvas;
use crate::cell::{Cell, CellStyle};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// The empty braille pattern; dots are OR-ed into its low byte.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Horizontal pixels per cell.
pub const PIXELS_PER_CELL_X: i32 = 2;

/// Vertical pixels per cell.
pub const PIXELS_PER_CELL_Y: i32 = 4;

/// Braille dot bit for pixel (x % 2, y % 4), canonical dot numbering:
///
/// ```text
/// (0,0) (1,0)   bits: 0 3
/// (0,1) (1,1)   bits: 1 4
/// (0,2) (1,2)   bits: 2 5
/// (0,3) (1,3)   bits: 6 7
/// ```
const DOT_BITS: [[u8; 2]; 4] = [[0, 3], [1, 4], [2, 5], [6, 7]];

const fn dot_mask(pixel: Point) -> u8 {
    1 << DOT_BITS[(pixel.y & 3) as usize][(pixel.x & 1) as usize]
}

/// A cell canvas with a pixel-oriented API.
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    inner: CellCanvas,
}

impl BrailleCanvas {
    /// Create a braille canvas over the given cell area.
    pub fn new(area: Rect) -> Result<Self> {
        Ok(Self {
            inner: CellCanvas::new(area)?,
        })
    }

    /// The underlying cell area.
    #[must_use]
    pub const fn cell_area(&self) -> Rect {
        self.inner.area()
    }

    /// The pixel area: the cell area scaled by 2×4.
    #[must_use]
    pub const fn pixel_area(&self) -> Rect {
        let cells = self.inner.area();
        Rect::new(
            cells.x * PIXELS_PER_CELL_X,
            cells.y * PIXELS_PER_CELL_Y,
            cells.width * PIXELS_PER_CELL_X,
            cells.height * PIXELS_PER_CELL_Y,
        )
    }

    fn cell_of(&self, pixel: Point) -> Result<Point> {
        if !self.pixel_area().contains(pixel) {
            return Err(Error::OutOfBounds {
                point: pixel,
                area: self.pixel_area(),
            });
        }
        Ok(Point::new(
            pixel.x.div_euclid(PIXELS_PER_CELL_X),
            pixel.y.div_euclid(PIXELS_PER_CELL_Y),
        ))
    }

    fn pattern(cell: Cell) -> u8 {
        let code = cell.rune as u32;
        if (BRAILLE_BASE..=BRAILLE_BASE + 0xFF).contains(&code) {
            (code - BRAILLE_BASE) as u8
        } else {
            0
        }
    }

    fn write_pattern(&mut self, cell_point: Point, pattern: u8, style: CellStyle) -> Result<()> {
        let rune = char::from_u32(BRAILLE_BASE + u32::from(pattern))
            .expect("braille block is a contiguous range of valid scalar values");
        self.inner.put_cell(cell_point, Cell::new(rune, style))
    }

    /// Turn a pixel on, applying the style to the pixel's cell.
    pub fn set_pixel(&mut self, pixel: Point, style: CellStyle) -> Result<()> {
        let cell_point = self.cell_of(pixel)?;
        let pattern = Self::pattern(self.inner.cell(cell_point)?) | dot_mask(pixel);
        self.write_pattern(cell_point, pattern, style)
    }

    /// Turn a pixel off. The cell keeps its style and stays a braille rune.
    pub fn clear_pixel(&mut self, pixel: Point) -> Result<()> {
        let cell_point = self.cell_of(pixel)?;
        let cell = self.inner.cell(cell_point)?;
        let pattern = Self::pattern(cell) & !dot_mask(pixel);
        self.write_pattern(cell_point, pattern, cell.style)
    }

    /// Check whether a pixel is on.
    pub fn pixel(&self, pixel: Point) -> Result<bool> {
        let cell_point = self.cell_of(pixel)?;
        let pattern = Self::pattern(self.inner.cell(cell_point)?);
        Ok(pattern & dot_mask(pixel) != 0)
    }

    /// Read the composed cell at a cell coordinate.
    pub fn cell(&self, cell_point: Point) -> Result<Cell> {
        self.inner.cell(cell_point)
    }

    /// Reset every pixel and style.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Blit the composed braille cells into a regular cell canvas
    /// one-for-one at the same coordinates.
    pub fn copy_to(&self, dst: &mut CellCanvas) -> Result<()> {
        self.inner.copy_to(dst)
    }
}
