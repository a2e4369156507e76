//! Error types shared across the celldash workspace.

use crate::draw::LineStyle;
use crate::geometry::{Point, Rect};
use thiserror::Error;

/// Result alias used throughout celldash.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core, layout and engine crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A canvas was created over an empty area.
    #[error("canvas area {area:?} is empty")]
    EmptyArea {
        /// The offending area.
        area: Rect,
    },

    /// A point or rectangle does not lie within a canvas.
    #[error("point {point:?} is outside of area {area:?}")]
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// The area it missed.
        area: Rect,
    },

    /// A text write landed on the trailer half of a full-width pair.
    #[error("cell at {point:?} is the trailer of a full-width rune and cannot be written directly")]
    TrailerWrite {
        /// Location of the trailer cell.
        point: Point,
    },

    /// Bad option values supplied at a construction boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Text or a title does not fit under the strict overrun mode.
    #[error("content of width {width} cells overflows the available {available} cells")]
    Overflow {
        /// Width the content needs.
        width: i32,
        /// Width that was available.
        available: i32,
    },

    /// No junction rune exists for the accumulated edge set.
    #[error("line style {style:?} has no junction rune for edge set {edges:#06b}")]
    UnsupportedJunction {
        /// The requested line style.
        style: LineStyle,
        /// Edge bitmask (N, E, S, W).
        edges: u8,
    },

    /// The line style itself is not supported by the requested operation.
    #[error("line style {0:?} is not supported here")]
    UnsupportedStyle(LineStyle),

    /// The governing context was cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// The terminal back-end reported an I/O failure.
    #[error("terminal I/O error: {0}")]
    TerminalIo(#[from] std::io::Error),

    /// The input stream delivered an error event. Not fatal by itself.
    #[error("input event error: {0}")]
    InputEvent(String),
}

impl Error {
    /// Convenience constructor for [`Error::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
