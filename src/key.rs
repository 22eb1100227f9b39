//! Keystroke representation for interpreter input

/// A single keystroke as delivered by the host editor.
///
/// The interpreter sits behind a host `type` hook, so the key model is
/// deliberately small: printable characters, Ctrl chords, and Escape.
/// Function and navigation keys never reach the interpreter; the host
/// handles them through its own keybinding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character (including space and digits)
    Char(char),
    /// Control key combination (e.g., Ctrl+D)
    Ctrl(char),
    /// Escape / interrupt keystroke
    Escape,
}

impl Key {
    /// The character payload, if this is a plain printable key.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Ctrl(c) => write!(f, "<C-{c}>"),
            Key::Escape => write!(f, "<Esc>"),
        }
    }
}
