//! The contract between the engine and a terminal back-end.

use crate::cancel::CancelToken;
use crate::cell::CellStyle;
use crate::error::Result;
use crate::event::Event;
use crate::geometry::{Point, Size};

/// A 2-D cell sink with an input event source.
///
/// Concrete back-ends (a raw TTY, a terminal library, the fake terminal used
/// in tests) implement this trait. All methods take `&self`: the input side is
/// read from a pump thread while the engine writes cells from the draw path,
/// so implementations guard their interior state themselves.
pub trait Terminal: Send + Sync {
    /// Current terminal dimensions. May change between calls.
    fn size(&self) -> Size;

    /// Clear the whole screen to spaces with the given style.
    fn clear(&self, style: &CellStyle) -> Result<()>;

    /// Make all buffered cell writes visible.
    fn flush(&self) -> Result<()>;

    /// Place the cursor at the given cell.
    fn set_cursor(&self, position: Point) -> Result<()>;

    /// Hide the cursor.
    fn hide_cursor(&self) -> Result<()>;

    /// Write one terminal column.
    ///
    /// Full-width runes arrive as the two-cell pair written by the caller:
    /// the leader carries the rune, the trailer carries
    /// [`TRAILER_RUNE`](crate::cell::TRAILER_RUNE).
    fn set_cell(&self, position: Point, rune: char, style: &CellStyle) -> Result<()>;

    /// Block until the next input event or cancellation.
    ///
    /// Returns [`Error::Cancelled`](crate::Error::Cancelled) within 500 ms of
    /// the token firing.
    fn event(&self, cancel: &CancelToken) -> Result<Event>;

    /// Restore the terminal to its pre-run state. Idempotent.
    fn close(&self) -> Result<()>;
}
