//! The shipped crossterm back-end.

use crate::color_mode::ColorMode;
use crate::input::convert_event;
use celldash_core::{
    CancelToken, CellStyle, Error, Event, Point, Result, Size, Terminal, TRAILER_RUNE,
};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{Stdout, Write};
use std::sync::Mutex;
use std::time::Duration;

/// How often the blocking event read re-checks its cancellation token.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Options for [`CrosstermTerminal::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOptions {
    /// Colour reduction mode.
    pub color_mode: ColorMode,
    /// Capture mouse events.
    pub mouse: bool,
}

impl TerminalOptions {
    /// Create default options: system colours, no mouse capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colour mode.
    #[must_use]
    pub const fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Enable or disable mouse capture.
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}

struct WriteState {
    out: Stdout,
    /// Last style applied to the terminal; avoids redundant escape
    /// sequences for runs of identically styled cells.
    last_style: Option<CellStyle>,
    closed: bool,
}

/// A [`Terminal`] over raw-mode crossterm with an alternate screen.
///
/// Created with the terminal entered; [`close`](Terminal::close) restores
/// the previous state and is also run on drop.
pub struct CrosstermTerminal {
    state: Mutex<WriteState>,
    options: TerminalOptions,
}

impl CrosstermTerminal {
    /// Enter raw mode and the alternate screen.
    pub fn new(options: TerminalOptions) -> Result<Self> {
        let mut out = std::io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        if options.mouse {
            execute!(out, EnableMouseCapture)?;
        }
        Ok(Self {
            state: Mutex::new(WriteState {
                out,
                last_style: None,
                closed: false,
            }),
            options,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WriteState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn apply_style(&self, out: &mut Stdout, style: &CellStyle) -> Result<()> {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        queue!(
            out,
            SetForegroundColor(self.options.color_mode.to_crossterm(style.fg)),
            SetBackgroundColor(self.options.color_mode.to_crossterm(style.bg)),
        )?;
        for (enabled, attribute) in [
            (style.bold, Attribute::Bold),
            (style.italic, Attribute::Italic),
            (style.underline, Attribute::Underlined),
            (style.strikethrough, Attribute::CrossedOut),
            (style.inverse, Attribute::Reverse),
            (style.blink, Attribute::SlowBlink),
            (style.dim, Attribute::Dim),
        ] {
            if enabled {
                queue!(out, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> Size {
        crossterm::terminal::size()
            .map(|(w, h)| Size::new(i32::from(w), i32::from(h)))
            .unwrap_or(Size::ZERO)
    }

    fn clear(&self, style: &CellStyle) -> Result<()> {
        let mut state = self.lock();
        let WriteState { out, last_style, .. } = &mut *state;
        self.apply_style(out, style)?;
        *last_style = Some(*style);
        queue!(out, Clear(ClearType::All))?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.lock().out.flush()?;
        Ok(())
    }

    fn set_cursor(&self, position: Point) -> Result<()> {
        let mut state = self.lock();
        let column = u16::try_from(position.x)
            .map_err(|_| Error::invalid_argument(format!("cursor x {} out of range", position.x)))?;
        let row = u16::try_from(position.y)
            .map_err(|_| Error::invalid_argument(format!("cursor y {} out of range", position.y)))?;
        queue!(state.out, MoveTo(column, row), Show)?;
        Ok(())
    }

    fn hide_cursor(&self) -> Result<()> {
        queue!(self.lock().out, Hide)?;
        Ok(())
    }

    fn set_cell(&self, position: Point, rune: char, style: &CellStyle) -> Result<()> {
        // The leader's double-width glyph covers the trailer column.
        if rune == TRAILER_RUNE {
            return Ok(());
        }
        let column = u16::try_from(position.x)
            .map_err(|_| Error::invalid_argument(format!("cell x {} out of range", position.x)))?;
        let row = u16::try_from(position.y)
            .map_err(|_| Error::invalid_argument(format!("cell y {} out of range", position.y)))?;

        let mut state = self.lock();
        let WriteState { out, last_style, .. } = &mut *state;
        queue!(out, MoveTo(column, row))?;
        if last_style.as_ref() != Some(style) {
            self.apply_style(out, style)?;
            *last_style = Some(*style);
        }
        queue!(out, Print(rune))?;
        Ok(())
    }

    fn event(&self, cancel: &CancelToken) -> Result<Event> {
        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if crossterm::event::poll(EVENT_POLL_INTERVAL)? {
                if let Some(event) = convert_event(crossterm::event::read()?) {
                    return Ok(event);
                }
            }
        }
    }

    fn close(&self) -> Result<()> {
        let mut state = self.lock();
        if state.closed {
            return Ok(());
        }
        state.closed = true;
        if self.options.mouse {
            let _ = execute!(state.out, DisableMouseCapture);
        }
        let _ = execute!(state.out, SetAttribute(Attribute::Reset), ResetColor, Show);
        let _ = execute!(state.out, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
