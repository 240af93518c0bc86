// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to get one job done.
//
// Rules for this layer:
//   - No sampling or layout logic here (that's Layer 5)
//   - No printing (that's Layer 1)
//   - Only workflow coordination

// Run configuration shared by all use cases
pub mod config;

// Full generation: prompts in, LaTeX document out
pub mod generate_use_case;

// Dry run: validate and report, write nothing
pub mod check_use_case;
