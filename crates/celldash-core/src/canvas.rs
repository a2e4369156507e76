//! A bounded 2-D buffer of terminal cells.

use crate::cell::{Cell, CellStyle};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::rune::rune_width;
use crate::terminal::Terminal;

/// A rectangular buffer of cells, total over its area.
///
/// Widgets draw onto a canvas; the engine composes canvases and flushes the
/// result to the terminal with minimal writes via [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCanvas {
    area: Rect,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Create a canvas covering the given area, filled with blank cells.
    pub fn new(area: Rect) -> Result<Self> {
        if area.is_empty() {
            return Err(Error::EmptyArea { area });
        }
        let count = (area.width as usize) * (area.height as usize);
        Ok(Self {
            area,
            cells: vec![Cell::default(); count],
        })
    }

    /// Create a canvas of the given size rooted at the origin.
    pub fn from_size(size: Size) -> Result<Self> {
        Self::new(Rect::from_size(size))
    }

    /// The area this canvas covers.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// The canvas dimensions.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.area.size()
    }

    fn index(&self, point: Point) -> Result<usize> {
        if !self.area.contains(point) {
            return Err(Error::OutOfBounds {
                point,
                area: self.area,
            });
        }
        let col = (point.x - self.area.x) as usize;
        let row = (point.y - self.area.y) as usize;
        Ok(row * self.area.width as usize + col)
    }

    fn point_at(&self, index: usize) -> Point {
        let width = self.area.width as usize;
        Point::new(
            self.area.x + (index % width) as i32,
            self.area.y + (index / width) as i32,
        )
    }

    /// Read the cell at a point.
    pub fn cell(&self, point: Point) -> Result<Cell> {
        Ok(self.cells[self.index(point)?])
    }

    /// If the cell leads a full-width pair, blank the pair's trailer.
    fn release_leader(&mut self, index: usize) {
        if rune_width(self.cells[index].rune) != 2 {
            return;
        }
        let trailer = index + 1;
        if trailer < self.cells.len() && self.cells[trailer].is_trailer() {
            self.cells[trailer] = Cell::default();
        }
    }

    /// Raw single-cell write, bypassing the trailer guard.
    ///
    /// Used by the drawing primitives that are allowed to replace the trailer
    /// half of a pair (the three-dot overrun mode).
    pub(crate) fn put_cell(&mut self, point: Point, cell: Cell) -> Result<()> {
        let index = self.index(point)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Write a rune at a point.
    ///
    /// A full-width rune writes its two-cell pair atomically and requires the
    /// trailer column to be inside the area. Returns the number of cells
    /// written (1 or 2).
    ///
    /// Writing onto the trailer half of an existing full-width pair is
    /// rejected with [`Error::TrailerWrite`]; overwrite the pair through its
    /// leader instead.
    pub fn set_cell(&mut self, point: Point, rune: char, style: CellStyle) -> Result<usize> {
        if rune.is_control() {
            return Err(Error::invalid_argument(format!(
                "rune {rune:?} is a control character"
            )));
        }
        let index = self.index(point)?;
        if self.cells[index].is_trailer() {
            return Err(Error::TrailerWrite { point });
        }

        if rune_width(rune) == 2 {
            let trailer_point = Point::new(point.x + 1, point.y);
            let trailer_index = self.index(trailer_point)?;
            self.release_leader(index);
            self.release_leader(trailer_index);
            self.cells[index] = Cell::new(rune, style);
            self.cells[trailer_index] = Cell::trailer(style);
            Ok(2)
        } else {
            self.release_leader(index);
            self.cells[index] = Cell::new(rune, style);
            Ok(1)
        }
    }

    /// Fill a sub-rectangle with copies of the rune. Idempotent.
    ///
    /// The rectangle must lie fully inside the canvas area. A full-width
    /// rune is laid out in pairs; a trailing column a pair cannot fit into is
    /// left untouched.
    pub fn set_area_cells(&mut self, rect: Rect, rune: char, style: CellStyle) -> Result<()> {
        if !self.area.contains_rect(&rect) {
            return Err(Error::OutOfBounds {
                point: rect.origin(),
                area: self.area,
            });
        }
        let width = rune_width(rune);
        for y in rect.y..rect.bottom() {
            // A pair straddling the left edge would leave an orphan trailer
            // in the fill region; release it through its leader.
            let first = self.index(Point::new(rect.x, y))?;
            if self.cells[first].is_trailer() {
                if rect.x > self.area.x {
                    self.cells[first - 1] = Cell::default();
                }
                self.cells[first] = Cell::default();
            }
            let mut x = rect.x;
            while x + width <= rect.right() {
                self.set_cell(Point::new(x, y), rune, style)?;
                x += width;
            }
        }
        Ok(())
    }

    /// Reset every cell to the blank default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Copy the overlapping intersection into `dst` at the same absolute
    /// coordinates. Non-intersecting regions of `dst` are unchanged.
    pub fn copy_to(&self, dst: &mut Self) -> Result<()> {
        let Some(overlap) = self.area.intersection(&dst.area) else {
            return Ok(());
        };
        for y in overlap.y..overlap.bottom() {
            for x in overlap.x..overlap.right() {
                let point = Point::new(x, y);
                let cell = self.cell(point)?;
                dst.put_cell(point, cell)?;
            }
        }
        Ok(())
    }

    /// Copy this canvas into `dst` with its origin placed at `at`, clipping
    /// to `dst`'s area.
    pub fn copy_to_at(&self, dst: &mut Self, at: Point) -> Result<()> {
        let offset = at - self.area.origin();
        for (index, cell) in self.cells.iter().enumerate() {
            let target = self.point_at(index) + offset;
            if dst.area.contains(target) {
                dst.put_cell(target, *cell)?;
            }
        }
        Ok(())
    }

    /// Flush this canvas to the terminal, writing only cells that differ
    /// from `previous` (the frame already on screen). With no previous frame
    /// every cell is written. Returns the number of cells written.
    ///
    /// The canvas size must match the terminal size.
    pub fn apply(
        &self,
        terminal: &dyn Terminal,
        previous: Option<&CellCanvas>,
    ) -> Result<usize> {
        let term_size = terminal.size();
        if term_size != self.size() {
            return Err(Error::invalid_argument(format!(
                "canvas size {:?} does not match terminal size {term_size:?}",
                self.size()
            )));
        }
        let diffable = previous.filter(|p| p.area == self.area);

        let mut written = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            if let Some(prev) = diffable {
                if prev.cells[index] == *cell {
                    continue;
                }
            }
            let point = self.point_at(index) - self.area.origin();
            terminal.set_cell(point, cell.rune, &cell.style)?;
            written += 1;
        }
        terminal.flush()?;
        Ok(written)
    }
}
