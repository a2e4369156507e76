//! A programmable in-memory terminal.

use celldash_core::{
    CancelToken, Cell, CellStyle, Error, Event, EventQueue, Point, Result, Size, Terminal,
    TRAILER_RUNE,
};
use std::sync::Mutex;

#[derive(Debug)]
struct Screen {
    size: Size,
    cells: Vec<Cell>,
    cursor: Option<Point>,
    cursor_hidden: bool,
    cells_written: usize,
    flushes: usize,
    closed: bool,
}

impl Screen {
    fn new(size: Size) -> Self {
        let count = (size.width.max(0) as usize) * (size.height.max(0) as usize);
        Self {
            size,
            cells: vec![Cell::default(); count],
            cursor: None,
            cursor_hidden: false,
            cells_written: 0,
            flushes: 0,
            closed: false,
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 || point.x >= self.size.width || point.y >= self.size.height {
            return None;
        }
        Some((point.y * self.size.width + point.x) as usize)
    }
}

/// An in-memory [`Terminal`] for tests.
///
/// Records every cell write and flush, renders its buffer as a string for
/// golden comparisons, and delivers injected events through a real event
/// queue so blocking-pull behaviour is exercised too.
#[derive(Debug)]
pub struct FakeTerminal {
    screen: Mutex<Screen>,
    events: EventQueue,
}

impl FakeTerminal {
    /// Create a fake terminal of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            screen: Mutex::new(Screen::new(size)),
            events: EventQueue::new(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue an input event for delivery through [`Terminal::event`].
    pub fn inject(&self, event: Event) {
        self.events.push(event);
    }

    /// Change the terminal size, clearing the buffer, and deliver the
    /// corresponding [`Event::Resize`].
    pub fn resize(&self, size: Size) {
        {
            let mut screen = self.lock();
            *screen = Screen::new(size);
        }
        self.inject(Event::Resize { size });
    }

    /// Read back a written cell.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        let screen = self.lock();
        screen.index(point).map(|i| screen.cells[i])
    }

    /// Render the buffer as newline-separated rows.
    ///
    /// Trailer cells of full-width pairs render as nothing, so each row has
    /// one character per rune rather than per column.
    #[must_use]
    pub fn screen(&self) -> String {
        let screen = self.lock();
        let mut out = String::new();
        for y in 0..screen.size.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..screen.size.width {
                let cell = screen.cells[(y * screen.size.width + x) as usize];
                if cell.rune != TRAILER_RUNE {
                    out.push(cell.rune);
                }
            }
        }
        out
    }

    /// Total cells written since creation or the last [`reset_counters`].
    ///
    /// [`reset_counters`]: Self::reset_counters
    #[must_use]
    pub fn cells_written(&self) -> usize {
        self.lock().cells_written
    }

    /// Total flushes since creation or the last counter reset.
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.lock().flushes
    }

    /// Check if [`Terminal::close`] was called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Check if the cursor is hidden.
    #[must_use]
    pub fn is_cursor_hidden(&self) -> bool {
        self.lock().cursor_hidden
    }

    /// The last cursor position set, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.lock().cursor
    }

    /// Zero the write and flush counters.
    pub fn reset_counters(&self) {
        let mut screen = self.lock();
        screen.cells_written = 0;
        screen.flushes = 0;
    }
}

impl Terminal for FakeTerminal {
    fn size(&self) -> Size {
        self.lock().size
    }

    fn clear(&self, style: &CellStyle) -> Result<()> {
        let mut screen = self.lock();
        screen.cells.fill(Cell::new(' ', *style));
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.lock().flushes += 1;
        Ok(())
    }

    fn set_cursor(&self, position: Point) -> Result<()> {
        let mut screen = self.lock();
        screen.cursor = Some(position);
        screen.cursor_hidden = false;
        Ok(())
    }

    fn hide_cursor(&self) -> Result<()> {
        self.lock().cursor_hidden = true;
        Ok(())
    }

    fn set_cell(&self, position: Point, rune: char, style: &CellStyle) -> Result<()> {
        let mut screen = self.lock();
        let Some(index) = screen.index(position) else {
            let size = screen.size;
            return Err(Error::OutOfBounds {
                point: position,
                area: celldash_core::Rect::from_size(size),
            });
        };
        screen.cells[index] = Cell::new(rune, *style);
        screen.cells_written += 1;
        Ok(())
    }

    fn event(&self, cancel: &CancelToken) -> Result<Event> {
        self.events.pull(cancel)
    }

    fn close(&self) -> Result<()> {
        self.lock().closed = true;
        self.events.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celldash_core::{Key, KeyboardEvent};

    #[test]
    fn test_new_terminal_is_blank() {
        let term = FakeTerminal::new(Size::new(3, 2));
        assert_eq!(term.screen(), "   \n   ");
        assert_eq!(term.cells_written(), 0);
    }

    #[test]
    fn test_set_cell_and_screen() {
        let term = FakeTerminal::new(Size::new(3, 2));
        term.set_cell(Point::new(0, 0), 'a', &CellStyle::new()).unwrap();
        term.set_cell(Point::new(2, 1), 'b', &CellStyle::new()).unwrap();
        assert_eq!(term.screen(), "a  \n  b");
        assert_eq!(term.cells_written(), 2);
    }

    #[test]
    fn test_set_cell_out_of_bounds() {
        let term = FakeTerminal::new(Size::new(3, 2));
        let result = term.set_cell(Point::new(3, 0), 'x', &CellStyle::new());
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_event_delivery() {
        let term = FakeTerminal::new(Size::new(3, 2));
        let event = Event::Keyboard(KeyboardEvent::new(Key::Char('q')));
        term.inject(event.clone());
        assert_eq!(term.event(&CancelToken::new()).unwrap(), event);
    }

    #[test]
    fn test_event_cancellation() {
        let term = FakeTerminal::new(Size::new(3, 2));
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(matches!(term.event(&cancel), Err(Error::Cancelled)));
    }

    #[test]
    fn test_resize_clears_and_notifies() {
        let term = FakeTerminal::new(Size::new(3, 2));
        term.set_cell(Point::new(0, 0), 'x', &CellStyle::new()).unwrap();
        term.resize(Size::new(2, 1));

        assert_eq!(term.screen(), "  ");
        let event = term.event(&CancelToken::new()).unwrap();
        assert_eq!(
            event,
            Event::Resize {
                size: Size::new(2, 1)
            }
        );
    }

    #[test]
    fn test_close_marks_and_wakes() {
        let term = FakeTerminal::new(Size::new(3, 2));
        term.close().unwrap();
        assert!(term.is_closed());
        assert!(matches!(
            term.event(&CancelToken::new()),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_counters_reset() {
        let term = FakeTerminal::new(Size::new(3, 2));
        term.set_cell(Point::new(0, 0), 'x', &CellStyle::new()).unwrap();
        term.flush().unwrap();
        term.reset_counters();
        assert_eq!(term.cells_written(), 0);
        assert_eq!(term.flushes(), 0);
    }
}
