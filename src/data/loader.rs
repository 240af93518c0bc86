// ============================================================
// Layer 4 — Prompt Loader
// ============================================================
// Reads a UTF-8 text file with one prompt per line.
//
//   fields.txt
//   ┌──────────────────────────────┐
//   │ har skrevet en compiler      │  → Prompt
//   │                              │  → skipped (blank)
//   │   kan lide Haskell           │  → Prompt (trimmed)
//   └──────────────────────────────┘
//
// A missing file, an unreadable file, or a file with no usable
// lines is an input error and stops the run before sampling.

use anyhow::Result;
use std::{fs, io, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::BingoError;
use crate::domain::prompt::Prompt;
use crate::domain::traits::PromptSource;

/// Loads prompts from a line-oriented text file.
/// Implements the PromptSource trait from Layer 3.
pub struct LinePromptLoader {
    path: PathBuf,
}

impl LinePromptLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Split already-read text into prompts.
    /// Kept separate from file access so it can be tested directly.
    pub fn parse(text: &str) -> Vec<Prompt> {
        let prep = Preprocessor::new();
        text.lines()
            .filter_map(|line| Prompt::new(prep.clean_line(line)))
            .collect()
    }
}

impl PromptSource for LinePromptLoader {
    fn load_prompts(&self) -> Result<Vec<Prompt>> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => BingoError::InputMissing {
                path: self.path.clone(),
            },
            _ => BingoError::InputUnreadable {
                path:   self.path.clone(),
                source: e,
            },
        })?;

        let prompts = Self::parse(&text);
        if prompts.is_empty() {
            return Err(BingoError::NoPrompts { path: self.path.clone() }.into());
        }

        tracing::info!(
            "Loaded {} prompts from '{}'",
            prompts.len(),
            self.path.display()
        );
        Ok(prompts)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use std::io::Write;

    fn bingo_error(err: &anyhow::Error) -> &BingoError {
        err.downcast_ref::<BingoError>().expect("expected a BingoError")
    }

    #[test]
    fn test_parse_skips_blank_and_trims() {
        let prompts = LinePromptLoader::parse("  A \n\n\t\nB\r\n   C\n");
        let texts: Vec<&str> = prompts.iter().map(Prompt::as_str).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        // Deduplication is the pool's job
        let prompts = LinePromptLoader::parse("A\nA\nB");
        assert_eq!(prompts.len(), 3);
    }

    #[test]
    fn test_parse_keeps_inner_spacing_distinct() {
        let prompts = LinePromptLoader::parse("a  b\na b\n");
        let texts: Vec<&str> = prompts.iter().map(Prompt::as_str).collect();
        assert_eq!(texts, vec!["a  b", "a b"]);
    }

    #[test]
    fn test_load_from_file_preserves_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "\u{FEFF}spiser rugbrød").unwrap();
        writeln!(f, "har været på Ø-bar").unwrap();

        let prompts = LinePromptLoader::new(f.path()).load_prompts().unwrap();
        assert_eq!(prompts[0].as_str(), "spiser rugbrød");
        assert_eq!(prompts[1].as_str(), "har været på Ø-bar");
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir  = tempfile::tempdir().unwrap();
        let err  = LinePromptLoader::new(dir.path().join("nope.txt"))
            .load_prompts()
            .unwrap_err();
        let err = bingo_error(&err);
        assert!(matches!(err, BingoError::InputMissing { .. }));
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_blank_file_is_input_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "   \n\n\t").unwrap();

        let err = LinePromptLoader::new(f.path()).load_prompts().unwrap_err();
        assert!(matches!(bingo_error(&err), BingoError::NoPrompts { .. }));
    }
}
