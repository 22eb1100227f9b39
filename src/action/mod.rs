//! Resolved actions
//!
//! An [`Action`] is what a completed key sequence means. Actions carry
//! all data needed to execute them apart from character arguments still
//! to be typed (find/till), which the controller collects via
//! [`Action::AwaitChar`].
//!
//! ## action/ Invariants
//!
//! - Actions represent interpreter-level intent, not key-level input.
//! - Actions contain no host- or platform-specific concepts beyond the
//!   opaque [`HostCommand`] descriptor.
//! - Actions are immutable once created.

use crate::movement::{FindKind, Motion};
use crate::operator::Operator;

/// Mode transitions reachable from a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    /// `i` - insert before the cursor
    Insert,
    /// `a` - insert after the cursor
    InsertAfter,
    /// `I` - insert at the first non-blank of the line
    InsertLineStart,
    /// `A` - insert at the end of the line
    InsertLineEnd,
    /// `o` - open a line below and insert
    OpenBelow,
    /// `O` - open a line above and insert
    OpenAbove,
    /// `v` - toggle characterwise visual
    Visual,
    /// `V` - toggle linewise visual
    VisualLine,
}

/// A host-native command the interpreter requests but never invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    pub command: String,
    pub args: Vec<String>,
}

impl HostCommand {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }
}

/// What a resolved key sequence does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Execute a motion (or extend the selection / complete an
    /// operator, depending on controller state).
    Motion(Motion),
    /// Begin (or, in visual mode, immediately apply) an operator.
    Operator(Operator),
    /// Wait for one more character to build a find/till motion.
    AwaitChar(FindKind),
    /// `G`: goto line `count` when a count was typed, else end of file.
    GotoOrFileEnd,
    /// Change mode.
    Switch(ModeSwitch),
    /// Hand a command descriptor back to the host (scroll, undo, ...).
    Host(HostCommand),
}
