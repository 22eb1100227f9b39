//! Character classification for word motions

/// Character categories for word boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    /// Whitespace characters (space, tab, newline, etc.)
    Space,
    /// Word characters: any non-space character absent from the
    /// separator set
    Word,
    /// Punctuation: any non-space character present in the separator set
    Punct,
}

/// Classify a character against the configured separator set.
///
/// A word boundary is any point where the class changes, with
/// consecutive [`CharKind::Space`] regions collapsed.
#[must_use]
pub fn classify(c: char, separators: &str) -> CharKind {
    if c.is_whitespace() {
        CharKind::Space
    } else if separators.contains(c) {
        CharKind::Punct
    } else {
        CharKind::Word
    }
}

/// Classify for WORD (big-word) motions: only whitespace separates, so
/// punctuation and word characters merge into one class.
#[must_use]
pub fn classify_big(c: char) -> CharKind {
    if c.is_whitespace() {
        CharKind::Space
    } else {
        CharKind::Word
    }
}
