// ============================================================
// Layer 4 — Prompt Input Pipeline
// ============================================================
//
//   fields.txt
//       │
//       ▼
//   LinePromptLoader  → reads lines, skips blanks
//       │
//       ▼
//   Preprocessor      → trims both ends, strips a BOM
//       │
//       ▼
//   PromptPool        → unique prompts, builds the shuffled deck
//

/// Reads prompts from a line-oriented text file
pub mod loader;

/// Cleans the ends of one raw line
pub mod preprocessor;

/// Unique prompts and deck construction
pub mod pool;
