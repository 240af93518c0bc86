// ============================================================
// Layer 5 — Board Generation
// ============================================================
// The two randomised steps of a run:
//
//   deck ──► BoardSampler ──► N distinct prompts per board
//                                   │
//                                   ▼
//                              BoardLayout ──► Grid per board
//
// Both take the run's random generator by &mut so a fixed seed
// reproduces every board exactly.

/// Deals the shared deck into per-board prompt sets
pub mod sampler;

/// Places a prompt set onto the grid
pub mod layout;
