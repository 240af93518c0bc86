// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the pipeline:
//
//   PromptSource      → where the prompt lines come from
//   DocumentRenderer  → how the finished grids become a document
//
// The application layer only sees these traits, so a test can
// feed prompts from memory and a different output format only
// needs a new renderer.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::fmt;

use crate::domain::board::Grid;
use crate::domain::prompt::Prompt;

// ─── PromptSource ─────────────────────────────────────────────────────────────
/// Anything that can yield the raw prompt list.
///
/// Implementations:
///   - LinePromptLoader → one prompt per non-empty line of a text file
///   - Vec<String>      → in-memory prompts (tests, embedding)
pub trait PromptSource {
    /// Load every usable prompt, in source order.
    /// Duplicates are allowed here; the pool removes them.
    fn load_prompts(&self) -> Result<Vec<Prompt>>;
}

impl PromptSource for Vec<String> {
    fn load_prompts(&self) -> Result<Vec<Prompt>> {
        Ok(self.iter().filter_map(|s| Prompt::new(s.trim())).collect())
    }
}

// ─── DocumentRenderer ─────────────────────────────────────────────────────────
/// Turns the finished boards into one text document.
///
/// Implementations:
///   - LatexRenderer → a LaTeX article, rules page first
pub trait DocumentRenderer {
    /// Render the rules section followed by one section per grid,
    /// in the order given.
    ///
    /// # Errors
    /// Whatever the underlying `fmt::Write` sink reports.
    fn render(&self, boards: &[Grid]) -> Result<String, fmt::Error>;
}
