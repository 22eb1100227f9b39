//! Status text projection
//!
//! Pure formatting of controller state for a host-rendered status
//! surface. Nothing here consumes input or influences interpretation.

use crate::key::Key;
use crate::mode::Mode;

/// Format the status line: mode indicator plus any accumulated count
/// digits and unresolved keys.
#[must_use]
pub fn status_text(
    mode: &Mode,
    count: Option<u32>,
    pending_operator: Option<Key>,
    pending_input: &[Key],
) -> String {
    let mut out = format!("-- {} --", mode.name());
    let mut tail = String::new();
    if let Some(n) = count {
        tail.push_str(&n.to_string());
    }
    if let Some(key) = pending_operator {
        tail.push_str(&key.to_string());
    }
    for key in pending_input {
        tail.push_str(&key.to_string());
    }
    if !tail.is_empty() {
        out.push(' ');
        out.push_str(&tail);
    }
    out
}
