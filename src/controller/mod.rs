//! Keystroke controller
//!
//! The central state machine. Owns the current mode, pending input,
//! count/operator accumulation, and the visual anchor; per keystroke it
//! consults the mapping table and the motion/operator catalogs and
//! reports what the host should do.
//!
//! ## controller/ Invariants
//!
//! - Only the controller transitions `Mode`.
//! - Operator-pending state is always actively awaiting a motion; any
//!   resolution, cancel, or abort clears it.
//! - Interpreter state resets the moment an edit request is issued,
//!   never waiting for host confirmation.
//! - An unmapped sequence forwards its final keystroke and resets the
//!   pending input to empty; the interpreter never wedges in a bad
//!   prefix state.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::action::{Action, HostCommand, ModeSwitch};
use crate::buffer::{BufferEdit, BufferView, Position, Range, RangeKind};
use crate::config::Settings;
use crate::key::Key;
use crate::keymap::{defaults::default_keymap, KeyMap, MapContext, MatchResult};
use crate::mode::{CursorStyle, Mode};
use crate::movement::{FindKind, Motion, MotionOutcome, MotionTarget};
use crate::operator::Operator;
use crate::status;

/// A host-visible consequence of a consumed keystroke, in application
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Apply a buffer mutation.
    Edit(BufferEdit),
    /// Move the host cursor.
    MoveCursor(Position),
    /// Show a selection from `anchor` to `active` (whole lines when
    /// `linewise`).
    Select {
        anchor: Position,
        active: Position,
        linewise: bool,
    },
    /// Collapse any selection being shown.
    ClearSelection,
    /// Text captured for the host's register/clipboard layer.
    Yank(String),
    /// Invoke a host-native command.
    Host(HostCommand),
}

/// Result of feeding one keystroke to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// False means the host must forward the keystroke to its default
    /// text-insertion path.
    pub consumed: bool,
    pub effects: Vec<Effect>,
}

impl KeyOutcome {
    fn consumed(effects: Vec<Effect>) -> Self {
        Self {
            consumed: true,
            effects,
        }
    }

    fn pass() -> Self {
        Self {
            consumed: false,
            effects: Vec::new(),
        }
    }
}

/// An operator waiting for its motion, with the count captured when the
/// operator keystroke resolved.
#[derive(Debug, Clone, Copy)]
struct PendingOperator {
    op: Operator,
    count: u32,
    key: Key,
}

/// The modal keystroke interpreter.
pub struct Controller {
    keymap: KeyMap,
    settings: Settings,
    mode: Mode,
    cursor: Position,
    count: u32,
    count_given: bool,
    pending: SmallVec<[Key; 4]>,
    pending_op: Option<PendingOperator>,
    pending_find: Option<FindKind>,
}

impl Controller {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_keymap(default_keymap(), settings)
    }

    #[must_use]
    pub fn with_keymap(keymap: KeyMap, settings: Settings) -> Self {
        Self {
            keymap,
            settings,
            mode: Mode::Normal,
            cursor: Position::default(),
            count: 0,
            count_given: false,
            pending: SmallVec::new(),
            pending_op: None,
            pending_find: None,
        }
    }

    /// Mutable access for host-driven remaps.
    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Host-reported cursor movement (clicks, host navigation).
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Update the word-separator set; word motions read it fresh on
    /// every invocation, so in-flight pending input is unaffected.
    pub fn set_word_separators(&mut self, separators: &str) {
        self.settings.word_separators = separators.to_string();
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cursor shape the host should render.
    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        if self.pending_op.is_some() || self.pending_find.is_some() {
            CursorStyle::Underline
        } else if self.mode == Mode::Insert {
            CursorStyle::Line
        } else {
            CursorStyle::Block
        }
    }

    /// Pure projection of interpreter state for a status surface.
    #[must_use]
    pub fn status_text(&self) -> String {
        status::status_text(
            &self.mode,
            self.count_given.then_some(self.count),
            self.pending_op.as_ref().map(|p| p.key),
            &self.pending,
        )
    }

    /// Whether any keystrokes are accumulated and unresolved.
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.count_given
            || self.pending_op.is_some()
            || self.pending_find.is_some()
            || !self.pending.is_empty()
    }

    /// Host-reported selection change. `Some` enters characterwise
    /// visual with the host's anchor; `None` (a collapsed selection)
    /// forces Normal idle from any mode.
    pub fn set_visual(&mut self, selection: Option<(Position, Position)>) {
        self.reset_pending();
        match selection {
            Some((anchor, active)) => {
                self.mode = Mode::Visual { anchor };
                self.cursor = active;
            }
            None => self.mode = Mode::Normal,
        }
    }

    /// Interpret host `type` input. Single characters go through key
    /// interpretation; longer composed strings are never mappable and
    /// are forwarded.
    pub fn type_text(&mut self, buf: &dyn BufferView, text: &str) -> KeyOutcome {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.type_key(buf, Key::Char(c)),
            _ => {
                trace!(text, "composed input forwarded");
                KeyOutcome::pass()
            }
        }
    }

    /// IME-style replacement of the `count` characters before the
    /// cursor. Consumed only while insert mode has a composition in
    /// flight; otherwise forwarded.
    pub fn replace_prev_char(&mut self, text: &str, count: u32) -> KeyOutcome {
        if self.mode != Mode::Insert {
            return KeyOutcome::pass();
        }
        let count = (count as usize).min(self.cursor.col);
        let start = Position::new(self.cursor.line, self.cursor.col - count);
        let range = Range::new(start, self.cursor);
        self.cursor = Position::new(start.line, start.col + text.chars().count());
        KeyOutcome::consumed(vec![
            Effect::Edit(BufferEdit::Replace {
                range,
                text: text.to_string(),
            }),
            Effect::MoveCursor(self.cursor),
        ])
    }

    /// Feed one keystroke through the interpreter.
    pub fn type_key(&mut self, buf: &dyn BufferView, key: Key) -> KeyOutcome {
        trace!(%key, mode = self.mode.name(), "keystroke");

        if key == Key::Escape {
            return self.cancel(buf);
        }
        if self.mode == Mode::Insert {
            // Everything except Escape belongs to the host's insertion
            // path.
            return KeyOutcome::pass();
        }
        if let Some(kind) = self.pending_find.take() {
            return match key {
                Key::Char(ch) => self.run_motion(buf, Motion::Find { ch, kind }),
                _ => {
                    self.reset_pending();
                    KeyOutcome::pass()
                }
            };
        }
        if let Key::Char(c) = key {
            // Count digits are intercepted before any table lookup; a
            // solitary '0' stays a motion.
            if c.is_ascii_digit() && (c != '0' || self.count_given) && self.pending.is_empty() {
                let digit = u32::from(c as u8 - b'0');
                self.count = self.count.saturating_mul(10).saturating_add(digit);
                self.count_given = true;
                return KeyOutcome::consumed(Vec::new());
            }
        }

        self.pending.push(key);
        let context = if self.pending_op.is_some() {
            MapContext::OperatorPending
        } else if self.mode.is_visual() {
            MapContext::Visual
        } else {
            MapContext::Normal
        };
        match self.keymap.lookup(context, &self.pending) {
            MatchResult::Prefix | MatchResult::Ambiguous(_) => {
                // Exact commits only once no longer mapping shares the
                // prefix; disambiguation is the host's (timeout) concern.
                KeyOutcome::consumed(Vec::new())
            }
            MatchResult::Exact(action) => {
                let action = action.clone();
                self.pending.clear();
                debug!(?action, ?context, "sequence resolved");
                self.resolve(buf, action, key)
            }
            MatchResult::None => {
                debug!(%key, ?context, "unmapped sequence");
                self.pending.clear();
                KeyOutcome::pass()
            }
        }
    }

    fn resolve(&mut self, buf: &dyn BufferView, action: Action, key: Key) -> KeyOutcome {
        match action {
            Action::Motion(motion) => self.run_motion(buf, motion),
            Action::GotoOrFileEnd => {
                let motion = if self.count_given {
                    Motion::GotoLine(self.count.max(1) as usize)
                } else {
                    Motion::FileEnd
                };
                self.run_motion(buf, motion)
            }
            Action::AwaitChar(kind) => {
                self.pending_find = Some(kind);
                KeyOutcome::consumed(Vec::new())
            }
            Action::Operator(op) => self.run_operator_key(buf, op, key),
            Action::Switch(switch) => self.run_switch(buf, switch),
            Action::Host(command) => {
                self.take_count();
                KeyOutcome::consumed(vec![Effect::Host(command)])
            }
        }
    }

    fn run_motion(&mut self, buf: &dyn BufferView, motion: Motion) -> KeyOutcome {
        let separators = self.settings.word_separators.clone();

        if let Some(pending) = self.pending_op.take() {
            let total = pending.count.saturating_mul(self.take_count());
            let outcome = self.cursor_motion(buf, motion, total, MotionTarget::Operator, &separators);
            if !outcome.moved && motion.aborts_operator_on_failure() {
                debug!(?motion, "motion failed, aborting pending operator");
                self.reset_pending();
                return KeyOutcome::consumed(Vec::new());
            }
            let kind = if motion.is_linewise() {
                RangeKind::Linewise
            } else if motion.is_inclusive() {
                RangeKind::Inclusive
            } else {
                RangeKind::Exclusive
            };
            let range = Range::new(self.cursor, outcome.pos);
            return self.execute_operator(buf, pending.op, range, kind);
        }

        let count = self.take_count();
        match self.mode {
            Mode::Visual { anchor } | Mode::VisualLine { anchor } => {
                let outcome =
                    self.cursor_motion(buf, motion, count, MotionTarget::Operator, &separators);
                self.cursor = outcome.pos;
                let linewise = matches!(self.mode, Mode::VisualLine { .. });
                KeyOutcome::consumed(vec![
                    Effect::MoveCursor(self.cursor),
                    Effect::Select {
                        anchor,
                        active: self.cursor,
                        linewise,
                    },
                ])
            }
            _ => {
                let outcome =
                    self.cursor_motion(buf, motion, count, MotionTarget::Normal, &separators);
                if !outcome.moved {
                    return KeyOutcome::consumed(Vec::new());
                }
                self.cursor = outcome.pos;
                KeyOutcome::consumed(vec![Effect::MoveCursor(self.cursor)])
            }
        }
    }

    fn cursor_motion(
        &self,
        buf: &dyn BufferView,
        motion: Motion,
        count: u32,
        target: MotionTarget,
        separators: &str,
    ) -> MotionOutcome {
        motion.apply(buf, self.cursor, count, target, separators)
    }

    fn run_operator_key(&mut self, buf: &dyn BufferView, op: Operator, key: Key) -> KeyOutcome {
        if let Some(pending) = self.pending_op.take() {
            if pending.op == op {
                // Doubled operator: a linewise range of `count` lines
                // starting at the cursor.
                let total = pending.count.saturating_mul(self.take_count());
                let end_line = (self.cursor.line + total as usize - 1).min(buf.last_line());
                let range = Range::new(
                    Position::new(self.cursor.line, 0),
                    Position::new(end_line, 0),
                );
                return self.execute_operator(buf, op, range, RangeKind::Linewise);
            }
            debug!(?op, pending = ?pending.op, "conflicting operator, aborting");
            self.reset_pending();
            return KeyOutcome::consumed(Vec::new());
        }

        match self.mode {
            Mode::Visual { anchor } | Mode::VisualLine { anchor } => {
                let kind = if matches!(self.mode, Mode::VisualLine { .. }) {
                    RangeKind::Linewise
                } else {
                    RangeKind::Inclusive
                };
                self.take_count();
                let range = Range::new(anchor, self.cursor);
                self.execute_operator(buf, op, range, kind)
            }
            _ => {
                self.pending_op = Some(PendingOperator {
                    op,
                    count: self.take_count(),
                    key,
                });
                KeyOutcome::consumed(Vec::new())
            }
        }
    }

    fn execute_operator(
        &mut self,
        buf: &dyn BufferView,
        op: Operator,
        range: Range,
        kind: RangeKind,
    ) -> KeyOutcome {
        let effect = op.apply(buf, range, kind, &self.settings);
        let was_visual = self.mode.is_visual();

        let mut effects = Vec::new();
        if let Some(text) = effect.yanked {
            effects.push(Effect::Yank(text));
        }
        if let Some(edit) = effect.edit {
            effects.push(Effect::Edit(edit));
        }
        if let Some(cursor) = effect.cursor {
            self.cursor = cursor;
            effects.push(Effect::MoveCursor(cursor));
        }
        if was_visual {
            effects.push(Effect::ClearSelection);
        }
        self.mode = if effect.enter_insert {
            Mode::Insert
        } else {
            Mode::Normal
        };
        self.reset_pending();
        KeyOutcome::consumed(effects)
    }

    fn run_switch(&mut self, buf: &dyn BufferView, switch: ModeSwitch) -> KeyOutcome {
        self.take_count();
        match self.mode {
            Mode::Normal => self.switch_from_normal(buf, switch),
            Mode::Visual { anchor } => match switch {
                ModeSwitch::Visual => self.leave_visual(buf),
                ModeSwitch::VisualLine => {
                    self.mode = Mode::VisualLine { anchor };
                    KeyOutcome::consumed(vec![Effect::Select {
                        anchor,
                        active: self.cursor,
                        linewise: true,
                    }])
                }
                _ => KeyOutcome::consumed(Vec::new()),
            },
            Mode::VisualLine { anchor } => match switch {
                ModeSwitch::VisualLine => self.leave_visual(buf),
                ModeSwitch::Visual => {
                    self.mode = Mode::Visual { anchor };
                    KeyOutcome::consumed(vec![Effect::Select {
                        anchor,
                        active: self.cursor,
                        linewise: false,
                    }])
                }
                _ => KeyOutcome::consumed(Vec::new()),
            },
            Mode::Insert => KeyOutcome::pass(),
        }
    }

    fn switch_from_normal(&mut self, buf: &dyn BufferView, switch: ModeSwitch) -> KeyOutcome {
        let line = self.cursor.line;
        let len = buf.line_len(line);
        match switch {
            ModeSwitch::Insert => {
                self.mode = Mode::Insert;
                KeyOutcome::consumed(Vec::new())
            }
            ModeSwitch::InsertAfter => {
                if self.cursor.col < len {
                    self.cursor.col += 1;
                }
                self.mode = Mode::Insert;
                KeyOutcome::consumed(vec![Effect::MoveCursor(self.cursor)])
            }
            ModeSwitch::InsertLineStart => {
                self.cursor.col = buf.first_non_blank(line);
                self.mode = Mode::Insert;
                KeyOutcome::consumed(vec![Effect::MoveCursor(self.cursor)])
            }
            ModeSwitch::InsertLineEnd => {
                self.cursor.col = len;
                self.mode = Mode::Insert;
                KeyOutcome::consumed(vec![Effect::MoveCursor(self.cursor)])
            }
            ModeSwitch::OpenBelow => {
                self.mode = Mode::Insert;
                self.cursor = Position::new(line + 1, 0);
                KeyOutcome::consumed(vec![
                    Effect::Edit(BufferEdit::Insert {
                        at: Position::new(line, len),
                        text: "\n".to_string(),
                    }),
                    Effect::MoveCursor(self.cursor),
                ])
            }
            ModeSwitch::OpenAbove => {
                self.mode = Mode::Insert;
                self.cursor = Position::new(line, 0);
                KeyOutcome::consumed(vec![
                    Effect::Edit(BufferEdit::Insert {
                        at: Position::new(line, 0),
                        text: "\n".to_string(),
                    }),
                    Effect::MoveCursor(self.cursor),
                ])
            }
            ModeSwitch::Visual => {
                self.mode = Mode::Visual {
                    anchor: self.cursor,
                };
                KeyOutcome::consumed(vec![Effect::Select {
                    anchor: self.cursor,
                    active: self.cursor,
                    linewise: false,
                }])
            }
            ModeSwitch::VisualLine => {
                self.mode = Mode::VisualLine {
                    anchor: self.cursor,
                };
                KeyOutcome::consumed(vec![Effect::Select {
                    anchor: self.cursor,
                    active: self.cursor,
                    linewise: true,
                }])
            }
        }
    }

    fn leave_visual(&mut self, buf: &dyn BufferView) -> KeyOutcome {
        self.mode = Mode::Normal;
        let mut effects = vec![Effect::ClearSelection];
        if let Some(clamped) = self.clamp_to_line(buf) {
            effects.push(Effect::MoveCursor(clamped));
        }
        KeyOutcome::consumed(effects)
    }

    /// Escape: cancel pending state, leave insert/visual modes, and
    /// re-clamp the cursor onto the line.
    fn cancel(&mut self, buf: &dyn BufferView) -> KeyOutcome {
        self.reset_pending();
        match self.mode {
            Mode::Insert => {
                self.mode = Mode::Normal;
                let mut effects = Vec::new();
                if let Some(clamped) = self.clamp_to_line(buf) {
                    effects.push(Effect::MoveCursor(clamped));
                }
                KeyOutcome::consumed(effects)
            }
            Mode::Visual { .. } | Mode::VisualLine { .. } => self.leave_visual(buf),
            Mode::Normal => KeyOutcome::consumed(Vec::new()),
        }
    }

    /// Clamp the cursor to the last valid normal-mode column, returning
    /// the new position if it changed. Insert mode allows the cursor one
    /// column past end of line; normal mode does not.
    fn clamp_to_line(&mut self, buf: &dyn BufferView) -> Option<Position> {
        let max = buf.line_len(self.cursor.line).saturating_sub(1);
        if self.cursor.col > max {
            self.cursor.col = max;
            Some(self.cursor)
        } else {
            None
        }
    }

    fn take_count(&mut self) -> u32 {
        let count = if self.count_given { self.count.max(1) } else { 1 };
        self.count = 0;
        self.count_given = false;
        count
    }

    fn reset_pending(&mut self) {
        self.pending.clear();
        self.pending_op = None;
        self.pending_find = None;
        self.count = 0;
        self.count_given = false;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
