// ============================================================
// Layer 2 — Run Configuration
// ============================================================
// Everything a run needs, in one serialisable struct.
//
// Precedence, lowest first:
//   1. BingoConfig::default()
//   2. JSON config file (--config), missing keys keep defaults
//   3. command-line flags
//
// Example config file:
//   {
//     "board_count": 20,
//     "fields_per_board": 10,
//     "seed": 2024,
//     "theme": { "title": "Office Bingo", "rules": ["Be nice."] }
//   }

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::board::layout::GuaranteeMode;
use crate::board::sampler::DEFAULT_MAX_RETRIES;
use crate::domain::board::BoardSpec;
use crate::domain::error::BingoError;
use crate::infra::theme::DocumentTheme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BingoConfig {
    /// Number of boards to generate (X)
    pub board_count: usize,

    /// Prompts per board (N), 1 ≤ N ≤ rows × cols
    pub fields_per_board: usize,

    pub rows: usize,
    pub cols: usize,

    /// Prompt file, one prompt per line
    pub input: PathBuf,

    /// Where the LaTeX document is written
    pub output: PathBuf,

    /// Fixed seed for a reproducible run; None draws a fresh one
    pub seed: Option<u64>,

    pub guarantee: GuaranteeMode,

    /// Cap on consecutive rejected draws per board; None = no cap
    pub max_retries: Option<usize>,

    pub theme: DocumentTheme,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            board_count:      15,
            fields_per_board: 8,
            rows:             5,
            cols:             5,
            input:            PathBuf::from("fields.txt"),
            output:           PathBuf::from("bingo_tables.tex"),
            seed:             None,
            guarantee:        GuaranteeMode::default(),
            max_retries:      Some(DEFAULT_MAX_RETRIES),
            theme:            DocumentTheme::default(),
        }
    }
}

impl BingoConfig {
    /// Validate the board dimensions. Touches no files.
    pub fn board_spec(&self) -> Result<BoardSpec, BingoError> {
        BoardSpec::new(self.board_count, self.fields_per_board, self.rows, self.cols)
    }
}
