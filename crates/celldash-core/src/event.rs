//! Input events and the keyboard/mouse vocabulary.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyboard key.
///
/// Printable runes are carried through unchanged as [`Key::Char`];
/// non-printables are named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable rune.
    Char(char),
    /// A rune pressed together with Ctrl.
    Ctrl(char),
    /// Function key F1.
    F1,
    /// Function key F2.
    F2,
    /// Function key F3.
    F3,
    /// Function key F4.
    F4,
    /// Function key F5.
    F5,
    /// Function key F6.
    F6,
    /// Function key F7.
    F7,
    /// Function key F8.
    F8,
    /// Function key F9.
    F9,
    /// Function key F10.
    F10,
    /// Function key F11.
    F11,
    /// Function key F12.
    F12,
    /// Insert.
    Insert,
    /// Delete.
    Delete,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PgUp,
    /// Page down.
    PgDn,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Enter.
    Enter,
    /// Escape.
    Esc,
    /// The space bar.
    Space,
}

impl Key {
    /// The name of the key: the rune itself for printables, the constant's
    /// name otherwise.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Ctrl(c) => format!("Ctrl+{c}"),
            Self::F1 => "F1".to_string(),
            Self::F2 => "F2".to_string(),
            Self::F3 => "F3".to_string(),
            Self::F4 => "F4".to_string(),
            Self::F5 => "F5".to_string(),
            Self::F6 => "F6".to_string(),
            Self::F7 => "F7".to_string(),
            Self::F8 => "F8".to_string(),
            Self::F9 => "F9".to_string(),
            Self::F10 => "F10".to_string(),
            Self::F11 => "F11".to_string(),
            Self::F12 => "F12".to_string(),
            Self::Insert => "Insert".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::PgUp => "PgUp".to_string(),
            Self::PgDn => "PgDn".to_string(),
            Self::ArrowUp => "ArrowUp".to_string(),
            Self::ArrowDown => "ArrowDown".to_string(),
            Self::ArrowLeft => "ArrowLeft".to_string(),
            Self::ArrowRight => "ArrowRight".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Esc => "Esc".to_string(),
            Self::Space => "Space".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A mouse button. Additional or combined buttons are never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button press.
    Left,
    /// Middle button press.
    Middle,
    /// Right button press.
    Right,
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
    /// Any button released.
    Release,
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// The key that was pressed.
    pub key: Key,
}

impl KeyboardEvent {
    /// Create a new keyboard event.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self { key }
    }
}

/// A mouse event.
///
/// Coordinates are zero-based from the top-left of whatever frame the event
/// is delivered in: terminal-absolute at the back-end boundary, canvas-local
/// once routed to a widget. An event routed to a `Global`-scope widget keeps
/// its translated coordinates even when they fall outside the widget's
/// canvas, which is how the widget tells inside from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEvent {
    /// Position of the event.
    pub position: Point,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(position: Point, button: MouseButton) -> Self {
        Self { position, button }
    }
}

/// Any event a terminal back-end can deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A key press.
    Keyboard(KeyboardEvent),
    /// A mouse press, release or wheel movement.
    Mouse(MouseEvent),
    /// The terminal changed size. Delivered once per size change.
    Resize {
        /// The new terminal size.
        size: Size,
    },
    /// The input stream reported an error. Not fatal by itself.
    Error(String),
}
