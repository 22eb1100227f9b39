//! Operator catalog
//!
//! Operators turn an already-resolved range into an abstract buffer
//! edit plus a resulting cursor. They never compute their own range and
//! never touch interpreter state; the controller owns composition.
//!
//! ## operator/ Invariants
//!
//! - `apply` is a pure function of `(buffer snapshot, range, kind)`.
//! - Emitted edits use concrete end-exclusive character ranges.
//! - Yank never produces an edit.
//! - Indent/outdent always widen to whole lines.

use crate::buffer::{BufferEdit, BufferView, Position, Range, RangeKind};
use crate::config::Settings;

/// A text-mutating (or copying) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Delete,
    Change,
    Yank,
    Indent,
    Outdent,
}

/// What applying an operator to a range produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEffect {
    /// Buffer mutation for the host to apply, if any.
    pub edit: Option<BufferEdit>,
    /// Where the cursor lands; `None` leaves it unchanged.
    pub cursor: Option<Position>,
    /// Whether the interpreter transitions to insert mode (change).
    pub enter_insert: bool,
    /// Text captured by the operation (yanks, and the removed text of
    /// deletes/changes) for the host's register/clipboard layer.
    pub yanked: Option<String>,
}

/// Resolve an abstract `(range, kind)` pair into a concrete
/// end-exclusive character range per the composition rule: exclusive
/// ranges pass through, inclusive ranges extend one past their end, and
/// linewise ranges snap to cover both endpoints' full lines (including
/// a line terminator, borrowing the previous line's when the range
/// touches the last line).
#[must_use]
pub fn resolve_range(buf: &dyn BufferView, range: Range, kind: RangeKind) -> Range {
    let range = range.normalized();
    match kind {
        RangeKind::Exclusive => Range::new(
            range.start,
            clamp_col(buf, range.end),
        ),
        RangeKind::Inclusive => {
            let end = Position::new(
                range.end.line,
                (range.end.col + 1).min(buf.line_len(range.end.line)),
            );
            Range::new(range.start, end)
        }
        RangeKind::Linewise => {
            let (a, b) = (range.start.line, range.end.line.min(buf.last_line()));
            if b + 1 < buf.line_count() {
                Range::new(Position::new(a, 0), Position::new(b + 1, 0))
            } else if a > 0 {
                Range::new(
                    Position::new(a - 1, buf.line_len(a - 1)),
                    Position::new(b, buf.line_len(b)),
                )
            } else {
                Range::new(Position::new(0, 0), Position::new(b, buf.line_len(b)))
            }
        }
    }
}

fn clamp_col(buf: &dyn BufferView, pos: Position) -> Position {
    Position::new(pos.line, pos.col.min(buf.line_len(pos.line)))
}

/// Join the full text of lines `a..=b` with a trailing terminator, the
/// shape linewise registers expect.
fn linewise_text(buf: &dyn BufferView, a: usize, b: usize) -> String {
    let mut out = String::new();
    for idx in a..=b.min(buf.last_line()) {
        if let Some(line) = buf.line(idx) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

impl Operator {
    /// Indent/outdent only ever act on whole lines; the controller
    /// widens characterwise ranges before calling [`Operator::apply`].
    #[must_use]
    pub fn is_linewise_only(&self) -> bool {
        matches!(self, Operator::Indent | Operator::Outdent)
    }

    /// Compute the effect of this operator on `range`.
    #[must_use]
    pub fn apply(
        &self,
        buf: &dyn BufferView,
        range: Range,
        kind: RangeKind,
        settings: &Settings,
    ) -> OperatorEffect {
        let range = range.normalized();
        let kind = if self.is_linewise_only() {
            RangeKind::Linewise
        } else {
            kind
        };
        match self {
            Operator::Delete => delete(buf, range, kind),
            Operator::Change => change(buf, range, kind),
            Operator::Yank => yank(buf, range, kind, settings),
            Operator::Indent => reindent(buf, range, settings, true),
            Operator::Outdent => reindent(buf, range, settings, false),
        }
    }
}

fn delete(buf: &dyn BufferView, range: Range, kind: RangeKind) -> OperatorEffect {
    let resolved = resolve_range(buf, range, kind);
    let yanked = match kind {
        RangeKind::Linewise => linewise_text(buf, range.start.line, range.end.line),
        _ => buf.text_in(resolved),
    };
    let cursor = match kind {
        RangeKind::Linewise => cursor_after_line_delete(buf, range.start.line, range.end.line),
        _ => cursor_after_char_delete(buf, resolved),
    };
    OperatorEffect {
        edit: Some(BufferEdit::Delete { range: resolved }),
        cursor: Some(cursor),
        enter_insert: false,
        yanked: Some(yanked),
    }
}

fn change(buf: &dyn BufferView, range: Range, kind: RangeKind) -> OperatorEffect {
    match kind {
        RangeKind::Linewise => {
            // Changing lines clears their text but keeps one line open
            // for insertion, so the replacement spans text-only (the
            // inner terminators collapse away with it).
            let (a, b) = (range.start.line, range.end.line.min(buf.last_line()));
            let span = Range::new(Position::new(a, 0), Position::new(b, buf.line_len(b)));
            OperatorEffect {
                edit: Some(BufferEdit::Replace {
                    range: span,
                    text: String::new(),
                }),
                cursor: Some(Position::new(a, 0)),
                enter_insert: true,
                yanked: Some(linewise_text(buf, a, b)),
            }
        }
        _ => {
            let resolved = resolve_range(buf, range, kind);
            OperatorEffect {
                edit: Some(BufferEdit::Delete { range: resolved }),
                cursor: Some(resolved.start),
                enter_insert: true,
                yanked: Some(buf.text_in(resolved)),
            }
        }
    }
}

fn yank(buf: &dyn BufferView, range: Range, kind: RangeKind, settings: &Settings) -> OperatorEffect {
    let yanked = match kind {
        RangeKind::Linewise => linewise_text(buf, range.start.line, range.end.line),
        _ => buf.text_in(resolve_range(buf, range, kind)),
    };
    OperatorEffect {
        edit: None,
        cursor: settings.yank_moves_cursor.then_some(range.start),
        enter_insert: false,
        yanked: Some(yanked),
    }
}

fn reindent(
    buf: &dyn BufferView,
    range: Range,
    settings: &Settings,
    deeper: bool,
) -> OperatorEffect {
    let (a, b) = (range.start.line, range.end.line.min(buf.last_line()));
    let width = settings.indent_width.max(1);
    let mut lines = Vec::with_capacity(b - a + 1);
    for idx in a..=b {
        let line = buf.line(idx).unwrap_or_default();
        if deeper {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{line}", " ".repeat(width)));
            }
        } else {
            lines.push(outdent_line(line, width));
        }
    }
    let new_first_col = lines
        .first()
        .map(|l| l.chars().position(|c| !c.is_whitespace()).unwrap_or(0))
        .unwrap_or(0);
    let span = Range::new(Position::new(a, 0), Position::new(b, buf.line_len(b)));
    OperatorEffect {
        edit: Some(BufferEdit::Replace {
            range: span,
            text: lines.join("\n"),
        }),
        cursor: Some(Position::new(a, new_first_col)),
        enter_insert: false,
        yanked: None,
    }
}

/// Remove one level of indentation: a leading tab, or up to `width`
/// leading spaces.
fn outdent_line(line: &str, width: usize) -> String {
    if let Some(rest) = line.strip_prefix('\t') {
        return rest.to_string();
    }
    let mut strip = 0;
    for c in line.chars().take(width) {
        if c == ' ' {
            strip += 1;
        } else {
            break;
        }
    }
    line.chars().skip(strip).collect()
}

/// Cursor after a characterwise delete: range start, clamped to the
/// length the start line will have once the range is gone.
fn cursor_after_char_delete(buf: &dyn BufferView, resolved: Range) -> Position {
    let tail = buf
        .line_len(resolved.end.line)
        .saturating_sub(resolved.end.col);
    let new_len = resolved.start.col + tail;
    Position::new(
        resolved.start.line,
        resolved.start.col.min(new_len.saturating_sub(1)),
    )
}

/// Cursor after a linewise delete: first non-blank of the line that
/// slides into the deleted slot (or the one above when deleting at the
/// end of the buffer).
fn cursor_after_line_delete(buf: &dyn BufferView, a: usize, b: usize) -> Position {
    let b = b.min(buf.last_line());
    let removed = b - a + 1;
    if removed >= buf.line_count() {
        return Position::new(0, 0);
    }
    let landing_src = if b + 1 < buf.line_count() { b + 1 } else { a - 1 };
    let new_line = a.min(buf.line_count() - removed - 1);
    Position::new(new_line, buf.first_non_blank(landing_src))
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
