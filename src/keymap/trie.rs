//! Prefix trie over key sequences

use crate::action::Action;
use crate::key::Key;
use std::collections::HashMap;

/// Result of looking up a key sequence
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a> {
    /// Sequence exactly matches a binding with no longer extension
    Exact(&'a Action),
    /// Sequence is a strict prefix of one or more bindings but has no
    /// binding itself
    Prefix,
    /// Sequence has a binding AND is a prefix of a longer one (the
    /// "d" vs "dd" shape); the caller decides whether to wait
    Ambiguous(&'a Action),
    /// No binding matches and the sequence prefixes nothing
    None,
}

/// A node in the key sequence trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<Key, TrieNode>,
    action: Option<Action>,
}

impl TrieNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence, replacing any binding already at that exact
    /// sequence.
    pub fn insert(&mut self, keys: &[Key], action: Action) {
        match keys.split_first() {
            None => self.action = Some(action),
            Some((first, rest)) => {
                self.children.entry(*first).or_default().insert(rest, action);
            }
        }
    }

    /// Classify a sequence. Walks one node per key, so lookup is
    /// O(sequence length).
    #[must_use]
    pub fn lookup<'a>(&'a self, keys: &[Key]) -> MatchResult<'a> {
        let mut node = self;
        for key in keys {
            match node.children.get(key) {
                Some(child) => node = child,
                None => return MatchResult::None,
            }
        }
        match (&node.action, node.children.is_empty()) {
            (Some(action), true) => MatchResult::Exact(action),
            (Some(action), false) => MatchResult::Ambiguous(action),
            (None, false) => MatchResult::Prefix,
            (None, true) => MatchResult::None,
        }
    }
}
