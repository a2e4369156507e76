//! Abstract terminal colours.
//!
//! The engine only ever stores these abstract values; reducing them to what a
//! concrete terminal can display is the back-end's job.

use serde::{Deserialize, Serialize};

/// One of the eight ANSI system colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemColor {
    /// ANSI colour 0.
    Black,
    /// ANSI colour 1.
    Red,
    /// ANSI colour 2.
    Green,
    /// ANSI colour 3.
    Yellow,
    /// ANSI colour 4.
    Blue,
    /// ANSI colour 5.
    Magenta,
    /// ANSI colour 6.
    Cyan,
    /// ANSI colour 7.
    White,
}

impl SystemColor {
    /// All eight system colours in ANSI order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// ANSI palette index (0..=7).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }

    /// Look up a system colour by its ANSI index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            _ => None,
        }
    }
}

/// An abstract cell colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Defer to the terminal's default foreground or background.
    #[default]
    Default,
    /// One of the eight ANSI system colours.
    System(SystemColor),
    /// An indexed colour in the 256-colour palette.
    Indexed(u8),
}

impl Color {
    /// Convenience constructor for [`Color::System`].
    #[must_use]
    pub const fn system(color: SystemColor) -> Self {
        Self::System(color)
    }

    /// Convenience constructor for [`Color::Indexed`].
    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }
}
