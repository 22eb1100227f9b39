//! Mode-scoped mapping table
//!
//! Stores keystroke-sequence bindings in one prefix trie per mapping
//! context and classifies incoming sequences as exact, prefix,
//! ambiguous, or unmapped. Digit interception for counts happens in the
//! controller, before any trie lookup.

pub mod defaults;
pub mod trie;

pub use self::trie::{MatchResult, TrieNode};

use crate::action::Action;
use crate::error::KeymapError;
use crate::key::Key;
use std::collections::HashMap;

/// Context a lookup is scoped to. The same sequence may resolve
/// differently per context (visual-mode operators act on the selection;
/// the operator-pending table holds motions plus doubled operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapContext {
    Normal,
    OperatorPending,
    /// Shared by characterwise and linewise visual modes
    Visual,
}

/// Mapping table from (context, key sequence) to [`Action`].
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    mappings: HashMap<MapContext, TrieNode>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sequence binding.
    pub fn register(&mut self, context: MapContext, keys: Vec<Key>, action: Action) {
        self.mappings
            .entry(context)
            .or_default()
            .insert(&keys, action);
    }

    /// Register a binding from a key-string such as `"dw"`, `"<esc>"`,
    /// or `"<c-d>"`. This is the remap surface hosts feed user
    /// configuration through.
    pub fn bind(
        &mut self,
        context: MapContext,
        keys: &str,
        action: Action,
    ) -> Result<(), KeymapError> {
        let keys = parse_keys(keys)?;
        self.register(context, keys, action);
        Ok(())
    }

    /// Classify a key sequence within a context.
    #[must_use]
    pub fn lookup<'a>(&'a self, context: MapContext, keys: &[Key]) -> MatchResult<'a> {
        match self.mappings.get(&context) {
            Some(trie) => trie.lookup(keys),
            None => MatchResult::None,
        }
    }
}

/// Parse a human-readable key sequence. Plain characters map to
/// [`Key::Char`]; angle-bracket tokens name special keys (`<esc>`) and
/// Ctrl chords (`<c-x>`).
pub fn parse_keys(s: &str) -> Result<Vec<Key>, KeymapError> {
    if s.is_empty() {
        return Err(KeymapError::EmptySequence);
    }
    let mut keys = Vec::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '<' {
            keys.push(Key::Char(c));
            continue;
        }
        let mut token = String::new();
        let mut closed = false;
        for t in chars.by_ref() {
            if t == '>' {
                closed = true;
                break;
            }
            token.push(t);
        }
        if !closed {
            return Err(KeymapError::UnclosedToken(s.to_string()));
        }
        let lower = token.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("c-") {
            let mut it = rest.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => keys.push(Key::Ctrl(c)),
                _ => return Err(KeymapError::UnknownKeyName(token)),
            }
        } else if lower == "esc" {
            keys.push(Key::Escape);
        } else {
            return Err(KeymapError::UnknownKeyName(token));
        }
    }
    Ok(keys)
}
