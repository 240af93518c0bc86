// ============================================================
// Layer 3 — Prompt Domain Type
// ============================================================
// A single bingo-cell text item, e.g. "has written a compiler".
// Prompts are opaque: equality is exact string equality and
// the text itself is the only content.
//
// Reference: Rust Book §5 (Structs), §19 (Newtype pattern)

use serde::{Deserialize, Serialize};
use std::fmt;

/// One non-empty line of bingo text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Wrap a text line as a Prompt.
    /// Returns None for empty or whitespace-only text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_text() {
        assert!(Prompt::new("").is_none());
        assert!(Prompt::new("   \t").is_none());
    }

    #[test]
    fn test_keeps_text_verbatim() {
        let p = Prompt::new("har skrevet en compiler").unwrap();
        assert_eq!(p.as_str(), "har skrevet en compiler");
        assert_eq!(p.to_string(), "har skrevet en compiler");
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Prompt::new("Rust").unwrap();
        let b = Prompt::new("rust").unwrap();
        assert_ne!(a, b);
    }
}
