//! celldash — a terminal dashboard library.
//!
//! Composes rectangular widgets inside a recursive container tree, routes
//! user input to them, and drives a redraw loop that diffs each frame
//! against a back-buffer before flushing to the terminal.
//!
//! # Example
//!
//! ```no_run
//! use celldash::{
//!     CancelToken, ContainerBuilder, CrosstermTerminal, Key, RunOptions, SplitSize,
//!     TerminalOptions,
//! };
//! use std::sync::Arc;
//!
//! fn main() -> celldash::Result<()> {
//!     let terminal = Arc::new(CrosstermTerminal::new(TerminalOptions::new())?);
//!     let mut container = ContainerBuilder::new()
//!         .split_horizontal(
//!             SplitSize::Percent(70),
//!             ContainerBuilder::new(),
//!             ContainerBuilder::new(),
//!         )
//!         .build()?;
//!
//!     let cancel = CancelToken::new();
//!     let options = RunOptions::new().with_focus_key(Key::Tab);
//!     celldash::run(terminal, &mut container, &cancel, &options)
//! }
//! ```

pub use celldash_core::{
    draw, is_forced_half_width, rune_width, text_width, widget, BrailleCanvas, CancelToken, Cell,
    CellCanvas, CellStyle, Color, Error, Event, EventQueue, Key, KeyboardEvent, KeyboardScope,
    MouseButton, MouseEvent, MouseScope, Options, Point, Rect, Result, Size, SystemColor,
    Terminal, Widget, BRAILLE_BASE, ELLIPSIS_RUNE, RESIZE_MARKER_RUNE, TRAILER_RUNE,
};
pub use celldash_layout::{Axis, Container, ContainerBuilder, SplitSide, SplitSize};
pub use celldash_terminal::{run, ColorMode, CrosstermTerminal, RunOptions, TerminalOptions};
