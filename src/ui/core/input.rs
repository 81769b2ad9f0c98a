use super::tree::ControlPath;

/// A decoded keystroke.
///
/// Some keys arrive under two codes depending on the terminal (`Enter` vs
/// `LineFeed`, `Backspace` vs `Rubout`); use the `is_*` predicates instead of
/// matching a single variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    LineFeed,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Tab,
    BackTab,
    Backspace,
    Rubout,
    Delete,
    /// Ctrl-A / Home.
    LineStart,
    /// Ctrl-E / End.
    LineEnd,
    Unknown,
}

impl Key {
    pub fn is_enter(self) -> bool {
        matches!(self, Key::Enter | Key::LineFeed)
    }

    pub fn is_backspace(self) -> bool {
        matches!(self, Key::Backspace | Key::Rubout)
    }

    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(ch) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

/// What a backend hands back from a blocking read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Key,
    Focus,
    Blur,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Mutable so a handler can remap the key for its ancestors (Edit turns Enter into Tab).
    pub key: Option<Key>,
    pub target: ControlPath,
    /// The control that handled the event just before the current one.
    pub last: Option<ControlPath>,
    propagating: bool,
}

impl Event {
    pub fn key(key: Key, target: ControlPath) -> Self {
        Self::new(EventKind::Key, Some(key), target)
    }

    pub fn focus(target: ControlPath) -> Self {
        Self::new(EventKind::Focus, None, target)
    }

    pub fn blur(target: ControlPath) -> Self {
        Self::new(EventKind::Blur, None, target)
    }

    fn new(kind: EventKind, key: Option<Key>, target: ControlPath) -> Self {
        Self {
            kind,
            key,
            target,
            last: None,
            propagating: true,
        }
    }

    /// The key of a key event, `None` for focus notifications.
    pub fn key_code(&self) -> Option<Key> {
        match self.kind {
            EventKind::Key => self.key,
            EventKind::Focus | EventKind::Blur => None,
        }
    }

    pub fn stop(&mut self) {
        self.propagating = false;
    }

    pub fn is_propagating(&self) -> bool {
        self.propagating
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/input.rs"]
mod tests;
