//! Translation from crossterm input events to the core event vocabulary.

use celldash_core::{Event, Key, KeyboardEvent, MouseButton, MouseEvent, Point, Size};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CrosstermButton,
    MouseEventKind,
};

/// Convert a crossterm event.
///
/// Returns `None` for events outside the delivered vocabulary (cursor
/// motion, focus changes, paste, key releases); they are dropped rather
/// than mis-delivered.
pub(crate) fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            convert_key(key.code, key.modifiers)
                .map(|key| Event::Keyboard(KeyboardEvent::new(key)))
        }
        CrosstermEvent::Mouse(mouse) => {
            let position = Point::new(i32::from(mouse.column), i32::from(mouse.row));
            convert_button(mouse.kind).map(|button| Event::Mouse(MouseEvent::new(position, button)))
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            size: Size::new(i32::from(width), i32::from(height)),
        }),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost | CrosstermEvent::Paste(_) => None,
    }
}

fn convert_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = code {
            return Some(Key::Ctrl(c.to_ascii_lowercase()));
        }
    }
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(1) => Key::F1,
        KeyCode::F(2) => Key::F2,
        KeyCode::F(3) => Key::F3,
        KeyCode::F(4) => Key::F4,
        KeyCode::F(5) => Key::F5,
        KeyCode::F(6) => Key::F6,
        KeyCode::F(7) => Key::F7,
        KeyCode::F(8) => Key::F8,
        KeyCode::F(9) => Key::F9,
        KeyCode::F(10) => Key::F10,
        KeyCode::F(11) => Key::F11,
        KeyCode::F(12) => Key::F12,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PgUp,
        KeyCode::PageDown => Key::PgDn,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some(key)
}

fn convert_button(kind: MouseEventKind) -> Option<MouseButton> {
    match kind {
        MouseEventKind::Down(CrosstermButton::Left) => Some(MouseButton::Left),
        MouseEventKind::Down(CrosstermButton::Middle) => Some(MouseButton::Middle),
        MouseEventKind::Down(CrosstermButton::Right) => Some(MouseButton::Right),
        MouseEventKind::Up(_) => Some(MouseButton::Release),
        MouseEventKind::ScrollUp => Some(MouseButton::WheelUp),
        MouseEventKind::ScrollDown => Some(MouseButton::WheelDown),
        MouseEventKind::Drag(_) | MouseEventKind::Moved | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => None,
    }
}
