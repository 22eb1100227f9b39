//! Motion catalog
//!
//! Every motion is a pure function of `(buffer, position, count)` plus
//! the word-separator configuration. Motions never produce side effects;
//! the controller feeds their results into operators or cursor updates.
//!
//! ## movement/ Invariants
//!
//! - Motions never mutate anything; they compute a target position.
//! - Character motions clamp at line/buffer boundaries and do not wrap.
//! - Word motions treat a line terminator as whitespace, so crossing a
//!   line boundary counts as a word boundary.
//! - Find/till motions scan the current line only and report
//!   `moved: false` when the target is absent.
//! - Linewise/inclusive classification is declared metadata, never
//!   inferred by callers.

pub mod classify;

pub use classify::{classify, classify_big, CharKind};

use crate::buffer::{BufferView, Position};

/// Find/till scan variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindKind {
    /// `f` - land on the count-th occurrence
    Find,
    /// `t` - stop just before the count-th occurrence
    Till,
    /// `F` - land on the count-th occurrence, scanning backward
    FindBack,
    /// `T` - stop just after the count-th occurrence, scanning backward
    TillBack,
}

impl FindKind {
    #[must_use]
    pub fn is_forward(&self) -> bool {
        matches!(self, FindKind::Find | FindKind::Till)
    }
}

/// A cursor motion, carrying any character argument it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    /// Column 0 of the current line
    LineStart,
    /// First non-blank character of the current line
    FirstNonBlank,
    /// Last valid column (normal) or one-past-last (operator/visual)
    LineEnd,
    /// First non-blank of line 0
    FileStart,
    /// First non-blank of the last line
    FileEnd,
    /// First non-blank of 1-based line `n`, clamped to the buffer
    GotoLine(usize),
    WordForward { big: bool },
    WordBack { big: bool },
    WordEnd { big: bool },
    Find { ch: char, kind: FindKind },
}

/// Whether the motion resolves for normal-mode cursor placement or for
/// an operator/visual range end. Line-end style motions target the last
/// valid column in normal mode but one-past-last for operators, which
/// need an exclusive end that covers the final character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionTarget {
    Normal,
    Operator,
}

/// Result of applying a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionOutcome {
    pub pos: Position,
    /// False when the motion could not move (target not found, boundary
    /// already reached).
    pub moved: bool,
}

impl Motion {
    /// Linewise motions make an operator range cover whole lines.
    #[must_use]
    pub fn is_linewise(&self) -> bool {
        matches!(
            self,
            Motion::Up
                | Motion::Down
                | Motion::FileStart
                | Motion::FileEnd
                | Motion::GotoLine(_)
        )
    }

    /// Inclusive motions include the character they land on in an
    /// operator range.
    #[must_use]
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Motion::WordEnd { .. }
                | Motion::Find {
                    kind: FindKind::Find | FindKind::Till,
                    ..
                }
        )
    }

    /// A failed motion of this kind aborts a pending operator instead of
    /// completing it with a degenerate range.
    #[must_use]
    pub fn aborts_operator_on_failure(&self) -> bool {
        matches!(self, Motion::Find { .. })
    }

    /// Compute the target position for this motion.
    #[must_use]
    pub fn apply(
        &self,
        buf: &dyn BufferView,
        pos: Position,
        count: u32,
        target: MotionTarget,
        separators: &str,
    ) -> MotionOutcome {
        let count = count.max(1) as usize;
        let new = match self {
            Motion::Left => Position::new(pos.line, pos.col.saturating_sub(count)),
            Motion::Right => {
                let col = (pos.col + count).min(max_col(buf, pos.line, target));
                Position::new(pos.line, col)
            }
            Motion::Up => {
                let line = pos.line.saturating_sub(count);
                Position::new(line, pos.col.min(max_col(buf, line, target)))
            }
            Motion::Down => {
                let line = (pos.line + count).min(buf.last_line());
                Position::new(line, pos.col.min(max_col(buf, line, target)))
            }
            Motion::LineStart => Position::new(pos.line, 0),
            Motion::FirstNonBlank => Position::new(pos.line, buf.first_non_blank(pos.line)),
            Motion::LineEnd => {
                // With a count, line-end targets the end of the
                // (count-1)-th line below, like `$` does.
                let line = (pos.line + count - 1).min(buf.last_line());
                let col = match target {
                    MotionTarget::Normal => buf.line_len(line).saturating_sub(1),
                    MotionTarget::Operator => buf.line_len(line),
                };
                Position::new(line, col)
            }
            Motion::FileStart => Position::new(0, buf.first_non_blank(0)),
            Motion::FileEnd => {
                let line = buf.last_line();
                Position::new(line, buf.first_non_blank(line))
            }
            Motion::GotoLine(n) => {
                let line = n.saturating_sub(1).min(buf.last_line());
                Position::new(line, buf.first_non_blank(line))
            }
            Motion::WordForward { big } => {
                let mut p = pos;
                for _ in 0..count {
                    p = word_forward(buf, p, *big, separators);
                }
                clamp_to(buf, p, target)
            }
            Motion::WordBack { big } => {
                let mut p = pos;
                for _ in 0..count {
                    p = word_back(buf, p, *big, separators);
                }
                p
            }
            Motion::WordEnd { big } => {
                let mut p = pos;
                for _ in 0..count {
                    p = word_end(buf, p, *big, separators);
                }
                clamp_to(buf, p, target)
            }
            Motion::Find { ch, kind } => {
                return find_in_line(buf, pos, *ch, *kind, count);
            }
        };
        MotionOutcome {
            pos: new,
            moved: new != pos,
        }
    }
}

/// Highest column a cursor may rest on for this target.
fn max_col(buf: &dyn BufferView, line: usize, target: MotionTarget) -> usize {
    let len = buf.line_len(line);
    match target {
        MotionTarget::Normal => len.saturating_sub(1),
        MotionTarget::Operator => len,
    }
}

fn clamp_to(buf: &dyn BufferView, pos: Position, target: MotionTarget) -> Position {
    Position::new(pos.line, pos.col.min(max_col(buf, pos.line, target)))
}

/// Class of the character at `pos`, treating the position just past a
/// line's text as its terminator (whitespace). `None` past end of
/// buffer.
fn kind_at(buf: &dyn BufferView, pos: Position, big: bool, separators: &str) -> Option<CharKind> {
    if pos.line >= buf.line_count() {
        return None;
    }
    if pos.col >= buf.line_len(pos.line) {
        if pos.line == buf.last_line() {
            return None;
        }
        return Some(CharKind::Space);
    }
    let c = buf.char_at(pos)?;
    Some(if big {
        classify_big(c)
    } else {
        classify(c, separators)
    })
}

/// Next scan position, stepping across line boundaries.
fn step_forward(buf: &dyn BufferView, pos: Position) -> Option<Position> {
    if pos.col < buf.line_len(pos.line) {
        Some(Position::new(pos.line, pos.col + 1))
    } else if pos.line < buf.last_line() {
        Some(Position::new(pos.line + 1, 0))
    } else {
        None
    }
}

/// Previous scan position, stepping across line boundaries.
fn step_back(buf: &dyn BufferView, pos: Position) -> Option<Position> {
    if pos.col > 0 {
        Some(Position::new(pos.line, pos.col - 1))
    } else if pos.line > 0 {
        let line = pos.line - 1;
        Some(Position::new(line, buf.line_len(line)))
    } else {
        None
    }
}

/// One step of word-forward: skip the rest of the current class run,
/// then any whitespace, landing on the next class start.
fn word_forward(buf: &dyn BufferView, pos: Position, big: bool, separators: &str) -> Position {
    let Some(start_kind) = kind_at(buf, pos, big, separators) else {
        return pos;
    };
    let mut p = pos;
    if start_kind != CharKind::Space {
        while kind_at(buf, p, big, separators) == Some(start_kind) {
            match step_forward(buf, p) {
                Some(q) => p = q,
                None => return p,
            }
        }
    }
    while kind_at(buf, p, big, separators) == Some(CharKind::Space) {
        match step_forward(buf, p) {
            Some(q) => p = q,
            None => return p,
        }
    }
    p
}

/// One step of word-back: step off the current position, skip
/// whitespace backward, then walk to the start of that class run.
fn word_back(buf: &dyn BufferView, pos: Position, big: bool, separators: &str) -> Position {
    let Some(mut p) = step_back(buf, pos) else {
        return pos;
    };
    while kind_at(buf, p, big, separators) == Some(CharKind::Space) {
        match step_back(buf, p) {
            Some(q) => p = q,
            None => return p,
        }
    }
    let Some(kind) = kind_at(buf, p, big, separators) else {
        return p;
    };
    while let Some(q) = step_back(buf, p) {
        if kind_at(buf, q, big, separators) == Some(kind) {
            p = q;
        } else {
            break;
        }
    }
    p
}

/// One step of end-of-word: step forward, skip whitespace, then walk to
/// the last character of that class run.
fn word_end(buf: &dyn BufferView, pos: Position, big: bool, separators: &str) -> Position {
    let Some(mut p) = step_forward(buf, pos) else {
        return pos;
    };
    while kind_at(buf, p, big, separators) == Some(CharKind::Space) {
        match step_forward(buf, p) {
            Some(q) => p = q,
            None => return p,
        }
    }
    let Some(kind) = kind_at(buf, p, big, separators) else {
        return p;
    };
    while let Some(q) = step_forward(buf, p) {
        if kind_at(buf, q, big, separators) == Some(kind) {
            p = q;
        } else {
            break;
        }
    }
    p
}

/// Scan the current line for the count-th occurrence of `ch`.
fn find_in_line(
    buf: &dyn BufferView,
    pos: Position,
    ch: char,
    kind: FindKind,
    count: usize,
) -> MotionOutcome {
    let Some(line) = buf.line(pos.line) else {
        return MotionOutcome { pos, moved: false };
    };
    let chars: Vec<char> = line.chars().collect();
    let mut remaining = count;
    let found = if kind.is_forward() {
        let mut hit = None;
        for (i, c) in chars.iter().enumerate().skip(pos.col + 1) {
            if *c == ch {
                remaining -= 1;
                if remaining == 0 {
                    hit = Some(i);
                    break;
                }
            }
        }
        hit
    } else {
        let mut hit = None;
        for i in (0..pos.col.min(chars.len())).rev() {
            if chars[i] == ch {
                remaining -= 1;
                if remaining == 0 {
                    hit = Some(i);
                    break;
                }
            }
        }
        hit
    };
    let Some(idx) = found else {
        return MotionOutcome { pos, moved: false };
    };
    let col = match kind {
        FindKind::Find | FindKind::FindBack => idx,
        FindKind::Till => idx.saturating_sub(1),
        FindKind::TillBack => idx + 1,
    };
    let new = Position::new(pos.line, col);
    MotionOutcome {
        pos: new,
        moved: new != pos,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
