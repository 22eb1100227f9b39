//! Error types for the interpreter's fallible surfaces
//!
//! Keystroke interpretation itself never fails: unmapped input is
//! forwarded and bad prefixes reset (see the controller). Errors only
//! arise when hosts feed in remap definitions.

use thiserror::Error;

/// Failure while parsing a key-sequence string such as `"dw"` or
/// `"<c-d>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("empty key sequence")]
    EmptySequence,
    #[error("unclosed '<' token in key sequence {0:?}")]
    UnclosedToken(String),
    #[error("unknown key name <{0}>")]
    UnknownKeyName(String),
}
