//! Terminal cells and their display attributes.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Rune stored in the trailer cell of a full-width pair.
///
/// The leader cell holds the rune itself; the trailer holds this sentinel and
/// inherits the leader's style.
pub const TRAILER_RUNE: char = '\0';

/// Display attributes of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellStyle {
    /// Foreground colour.
    pub fg: Color,
    /// Background colour.
    pub bg: Color,
    /// Bold or increased intensity.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Inverted foreground and background.
    pub inverse: bool,
    /// Blinking text.
    pub blink: bool,
    /// Dim or decreased intensity.
    pub dim: bool,
}

impl CellStyle {
    /// Create a style with all defaults: both colours deferred to the
    /// terminal, all flags off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground colour.
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background colour.
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Enable or disable bold.
    #[must_use]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Enable or disable italic.
    #[must_use]
    pub const fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Enable or disable underline.
    #[must_use]
    pub const fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Enable or disable strikethrough.
    #[must_use]
    pub const fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Enable or disable inverse video.
    #[must_use]
    pub const fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Enable or disable blink.
    #[must_use]
    pub const fn with_blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    /// Enable or disable dim.
    #[must_use]
    pub const fn with_dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }
}

/// A single terminal cell: one rune plus its display attributes.
///
/// A cell always represents exactly one terminal column. A full-width rune
/// occupies two cells: the leader holds the rune, the trailer holds
/// [`TRAILER_RUNE`] and the leader's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The rune displayed in this cell.
    pub rune: char,
    /// Display attributes.
    pub style: CellStyle,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(rune: char, style: CellStyle) -> Self {
        Self { rune, style }
    }

    /// The trailer half of a full-width pair, inheriting the given style.
    #[must_use]
    pub const fn trailer(style: CellStyle) -> Self {
        Self::new(TRAILER_RUNE, style)
    }

    /// Check if this cell is the trailer half of a full-width pair.
    #[must_use]
    pub const fn is_trailer(&self) -> bool {
        self.rune == TRAILER_RUNE
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}
