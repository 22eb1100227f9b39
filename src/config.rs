//! Interpreter settings
//!
//! The core performs no file IO; hosts deserialize [`Settings`] from
//! whatever configuration layer they own (TOML, JSON, editor settings)
//! and hand it over at construction or update time.

use serde::Deserialize;

/// Separator set matching common host-editor defaults: any of these,
/// when not whitespace, classifies as punctuation for word motions.
pub const DEFAULT_WORD_SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";

/// Tunable interpreter behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters treated as punctuation by word motions; read fresh on
    /// every word-motion invocation, so updates apply immediately.
    pub word_separators: String,
    /// Whether yank moves the cursor to the start of the yanked range.
    pub yank_moves_cursor: bool,
    /// Spaces added/removed per indent/outdent level.
    pub indent_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_separators: DEFAULT_WORD_SEPARATORS.to_string(),
            yank_moves_cursor: true,
            indent_width: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_settings() {
        let settings: Settings = toml::from_str(
            r#"
            indent_width = 2
            yank_moves_cursor = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.indent_width, 2);
        assert!(!settings.yank_moves_cursor);
        // Omitted fields fall back to defaults.
        assert_eq!(settings.word_separators, DEFAULT_WORD_SEPARATORS);
    }
}
