use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::core::input::{Input, Key};

/// Decodes a crossterm event. Returns `None` for events the UI ignores
/// (mouse, focus changes, paste, key releases).
pub fn into_input(event: crossterm::event::Event) -> Option<Input> {
    match event {
        crossterm::event::Event::Key(key) if key.kind != KeyEventKind::Release => {
            Some(Input::Key(into_key(key)))
        }
        crossterm::event::Event::Resize(_, _) => Some(Input::Resize),
        _ => None,
    }
}

pub fn into_key(event: KeyEvent) -> Key {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = event.code {
            return into_control_chord(ch);
        }
    }

    match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::LineStart,
        KeyCode::End => Key::LineEnd,
        _ => Key::Unknown,
    }
}

fn into_control_chord(ch: char) -> Key {
    match ch.to_ascii_lowercase() {
        'a' => Key::LineStart,
        'e' => Key::LineEnd,
        'h' => Key::Rubout,
        'i' => Key::Tab,
        'j' => Key::LineFeed,
        'm' => Key::Enter,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
