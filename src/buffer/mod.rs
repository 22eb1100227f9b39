//! Buffer boundary types
//!
//! The interpreter never owns text storage: the host editor implements
//! [`BufferView`] to expose read access, and all mutations leave the core
//! as [`BufferEdit`] values for the host to apply.
//!
//! ## buffer/ Invariants
//!
//! - Positions are zero-based; `col` means "before character N".
//! - A buffer always has at least one line; an empty document is a single
//!   empty line.
//! - Column positions inside edits are character indices, never bytes.
//! - `BufferEdit` ranges are end-exclusive and already normalized.

/// A (line, column) position into a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A span between two positions. `start` and `end` need not be ordered
/// until [`Range::normalized`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Swap endpoints if needed so `start <= end`.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.end < self.start {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// How a resolved range relates to its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// End position excluded: [start, end)
    Exclusive,
    /// End position included: [start, end]
    Inclusive,
    /// Covers both endpoints' full lines regardless of column
    Linewise,
}

/// An abstract buffer mutation requested from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEdit {
    /// Insert `text` before the character at `at`.
    Insert { at: Position, text: String },
    /// Remove the characters in `range` (end-exclusive, may span lines).
    Delete { range: Range },
    /// Replace the characters in `range` (end-exclusive) with `text`.
    Replace { range: Range, text: String },
}

/// Read-only view of the host's text buffer.
///
/// Lines are returned without their terminators. Implementations are
/// consulted per keystroke and should be cheap to call repeatedly.
pub trait BufferView {
    /// Number of lines in the document (always at least 1).
    fn line_count(&self) -> usize;

    /// The text of line `idx`, without a trailing newline.
    fn line(&self, idx: usize) -> Option<&str>;

    /// Character length of line `idx`; 0 for out-of-range lines.
    fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map_or(0, |l| l.chars().count())
    }

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// The character at `pos`, or `None` at or past end of line.
    fn char_at(&self, pos: Position) -> Option<char> {
        self.line(pos.line)?.chars().nth(pos.col)
    }

    /// Column of the first non-blank character on `idx`, 0 if the line is
    /// blank or out of range.
    fn first_non_blank(&self, idx: usize) -> usize {
        self.line(idx).map_or(0, |l| {
            l.chars()
                .position(|c| !c.is_whitespace())
                .unwrap_or(0)
        })
    }

    /// Extract the text covered by an end-exclusive `range`, joining lines
    /// with `\n`. A range ending at column 0 of a later line covers the
    /// previous line's terminator but none of that line's text.
    fn text_in(&self, range: Range) -> String {
        let range = range.normalized();
        let mut out = String::new();
        let last = range.end.line.min(self.last_line());
        for line_idx in range.start.line..=last {
            let Some(line) = self.line(line_idx) else {
                break;
            };
            if line_idx != range.start.line {
                out.push('\n');
            }
            let from = if line_idx == range.start.line {
                range.start.col
            } else {
                0
            };
            let to = if line_idx == range.end.line {
                range.end.col
            } else {
                line.chars().count()
            };
            out.extend(line.chars().skip(from).take(to.saturating_sub(from)));
        }
        out
    }
}

/// Simple line-vector buffer used by tests and benchmarks, and available
/// to hosts that want to mirror document content locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecBuffer {
    lines: Vec<String>,
}

impl VecBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Flat character offset of `pos`, counting line terminators as one
    /// character each. Positions past a line end clamp to it.
    fn offset(&self, pos: Position) -> usize {
        let mut off = 0;
        for (idx, line) in self.lines.iter().enumerate() {
            let len = line.chars().count();
            if idx == pos.line {
                return off + pos.col.min(len);
            }
            off += len + 1;
        }
        off.saturating_sub(1)
    }

    fn splice(&mut self, from: usize, to: usize, text: &str) {
        let flat: String = self.to_text();
        let mut chars: Vec<char> = flat.chars().collect();
        let to = to.min(chars.len());
        let from = from.min(to);
        chars.splice(from..to, text.chars());
        let rebuilt: String = chars.into_iter().collect();
        self.lines = rebuilt.split('\n').map(str::to_string).collect();
    }

    /// Apply an edit produced by the interpreter. Hosts with richer
    /// document models translate [`BufferEdit`] into their own API calls;
    /// this implementation exists so tests can close the loop.
    pub fn apply(&mut self, edit: &BufferEdit) {
        match edit {
            BufferEdit::Insert { at, text } => {
                let off = self.offset(*at);
                self.splice(off, off, text);
            }
            BufferEdit::Delete { range } => {
                let range = range.normalized();
                let (from, to) = (self.offset(range.start), self.offset(range.end));
                self.splice(from, to, "");
            }
            BufferEdit::Replace { range, text } => {
                let range = range.normalized();
                let (from, to) = (self.offset(range.start), self.offset(range.end));
                self.splice(from, to, text);
            }
        }
    }
}

impl Default for VecBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferView for VecBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }
}
