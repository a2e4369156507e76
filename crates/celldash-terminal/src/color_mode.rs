//! Colour-mode reduction for the crossterm back-end.
//!
//! The engine stores only abstract [`Color`] values; the back-end reduces
//! them to what the terminal can display according to the selected mode.

use celldash_core::Color;
use crossterm::style::Color as CrosstermColor;

/// Terminal colour capability mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// The eight ANSI system colours.
    #[default]
    Normal,
    /// The full 256-colour palette.
    Color256,
    /// The 6×6×6 colour cube (palette entries 16..=231).
    Cube216,
    /// The 24-step grayscale ramp (palette entries 232..=255).
    Grayscale,
}

impl ColorMode {
    /// Number of colours addressable in this mode.
    #[must_use]
    pub const fn palette_size(self) -> u16 {
        match self {
            Self::Normal => 8,
            Self::Color256 => 256,
            Self::Cube216 => 216,
            Self::Grayscale => 24,
        }
    }

    /// Reduce an abstract colour to a concrete crossterm colour.
    ///
    /// `Default` defers to the terminal's own default. Indexed colours are
    /// folded into the mode's palette, so an index is always displayable.
    #[must_use]
    pub fn to_crossterm(self, color: Color) -> CrosstermColor {
        match color {
            Color::Default => CrosstermColor::Reset,
            Color::System(system) => CrosstermColor::AnsiValue(system.index()),
            Color::Indexed(index) => CrosstermColor::AnsiValue(self.fold_index(index)),
        }
    }

    fn fold_index(self, index: u8) -> u8 {
        let index = u16::from(index);
        match self {
            Self::Normal => (index % 8) as u8,
            Self::Color256 => index as u8,
            Self::Cube216 => 16 + (index % 216) as u8,
            Self::Grayscale => 232 + (index % 24) as u8,
        }
    }
}
