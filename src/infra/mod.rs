// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the outside world apart from the
// prompt file:
//
//   latex.rs        — LaTeX DocumentRenderer and text escaping
//   theme.rs        — title, subtitle and rules text
//   config_store.rs — reads BingoConfig from a JSON file
//   output.rs       — writes the finished document to disk

/// LaTeX rendering of the rules page and boards
pub mod latex;

/// Static document text
pub mod theme;

/// JSON config file loading
pub mod config_store;

/// Output file writing
pub mod output;
