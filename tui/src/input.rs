use crossterm::event::{KeyCode, KeyEvent};
use deck_core::keymap::Key;

/// Translate a crossterm key event into the editor's key vocabulary.
pub fn to_key(event: &KeyEvent) -> Key {
    match event.code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
