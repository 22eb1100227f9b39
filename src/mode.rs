//! Interpreter mode definitions

use crate::buffer::Position;

/// Interpreter operating mode.
///
/// The visual variants carry their selection anchor so that a selection
/// existing outside visual mode is unrepresentable. Operator-pending is a
/// Normal sub-state held by the controller, not a mode of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal mode (command interpretation)
    Normal,
    /// Insert mode (keystrokes forwarded to the host's insertion path)
    Insert,
    /// Characterwise visual selection; anchor fixed at entry
    Visual { anchor: Position },
    /// Linewise visual selection; anchor fixed at entry
    VisualLine { anchor: Position },
}

/// Cursor shape the host should render for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// Full-cell block (normal and visual modes)
    Block,
    /// Thin vertical bar (insert mode)
    Line,
    /// Underline (operator-pending)
    Underline,
}

impl Mode {
    #[must_use]
    pub fn is_visual(&self) -> bool {
        matches!(self, Mode::Visual { .. } | Mode::VisualLine { .. })
    }

    /// Selection anchor, present only in visual modes.
    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        match self {
            Mode::Visual { anchor } | Mode::VisualLine { anchor } => Some(*anchor),
            _ => None,
        }
    }

    /// Display name for status surfaces.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Visual { .. } => "VISUAL",
            Mode::VisualLine { .. } => "VISUAL LINE",
        }
    }
}
