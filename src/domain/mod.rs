// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain types and traits describing what a bingo run IS:
// prompts, board configuration, grids, and the errors that
// can end a run.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness (sampling lives in data/ and board/)
//   - NO LaTeX (that's infra/)

// A single bingo-cell text item
pub mod prompt;

// BoardSpec, BoardPromptSet, Grid
pub mod board;

// BingoError and its taxonomy
pub mod error;

// Seams implemented by other layers
pub mod traits;
