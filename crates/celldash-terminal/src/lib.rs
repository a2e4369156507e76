//! Dashboard engine and crossterm back-end for celldash.
//!
//! [`run`] owns the terminal for the duration of the call: it pumps input
//! events into the shared queue, redraws the container tree on a ticker and
//! on resize, and flushes each frame as a diff against the previous one.
//! [`CrosstermTerminal`] is the shipped real back-end; any other
//! [`Terminal`](celldash_core::Terminal) implementation (such as the fake
//! used in tests) plugs in the same way.

mod backend;
mod color_mode;
mod engine;
mod input;

pub use backend::{CrosstermTerminal, TerminalOptions};
pub use color_mode::ColorMode;
pub use engine::{run, RunOptions};
