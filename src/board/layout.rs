// ============================================================
// Layer 5 — Board Layout
// ============================================================
// Places one board's N prompts onto an R×C grid in two phases.
//
//   Phase 1 (guaranteed):
//     pick guaranteed positions, pick min(R, N) of the prompts,
//     pair them up in the order both were drawn.
//
//   Phase 2 (fill):
//     the prompts not placed in phase 1 go to the positions not
//     reserved in phase 1, shuffled.
//
//   Everything else stays empty.
//
// Two ways to pick the guaranteed positions:
//
//   Scattered      R positions drawn from the whole grid.
//                  Nothing stops two of them sharing a row, so
//                  "one prompt per row" is a tendency, not a rule.
//                  All R positions are reserved even when N < R.
//
//   RowStratified  min(R, N) distinct rows, one random column each.
//                  Every one of those rows is guaranteed a prompt.
//
// Both phases together place exactly N prompts: phase 1 uses
// min(R, N) of them and phase 2 the rest, and there are always
// enough free positions because N ≤ R×C.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::board::{BoardPromptSet, BoardSpec, Grid};
use crate::domain::error::BingoError;
use crate::domain::prompt::Prompt;

/// How phase 1 chooses its positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuaranteeMode {
    #[default]
    Scattered,
    RowStratified,
}

#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    rows: usize,
    cols: usize,
    mode: GuaranteeMode,
}

impl BoardLayout {
    pub fn new(rows: usize, cols: usize, mode: GuaranteeMode) -> Self {
        Self { rows, cols, mode }
    }

    pub fn from_spec(spec: &BoardSpec, mode: GuaranteeMode) -> Self {
        Self::new(spec.rows(), spec.cols(), mode)
    }

    /// Lay out one board.
    ///
    /// # Errors
    /// `NoFields` for an empty prompt set, `EmptyGrid` for a
    /// zero-sized grid, `FieldsExceedCells` when N > R×C.
    /// BoardSpec already rules all three out.
    pub fn place<R: Rng + ?Sized>(
        &self,
        prompts: &BoardPromptSet,
        rng:     &mut R,
    ) -> Result<Grid, BingoError> {
        let n     = prompts.len();
        let cells = self.rows * self.cols;

        if self.rows == 0 || self.cols == 0 {
            return Err(BingoError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        if n == 0 {
            return Err(BingoError::NoFields);
        }
        if n > cells {
            return Err(BingoError::FieldsExceedCells { fields: n, cells });
        }

        let mut grid: Vec<Option<Prompt>> = vec![None; cells];

        // ── Phase 1: guaranteed placements ────────────────────────────────────
        let reserved = self.guaranteed_positions(n, rng);
        let guaranteed: Vec<usize> = index::sample(rng, n, self.rows.min(n)).into_vec();

        for (&pos, &prompt_idx) in reserved.iter().zip(&guaranteed) {
            grid[pos] = prompts.get(prompt_idx).cloned();
        }

        // ── Phase 2: fill the rest ────────────────────────────────────────────
        let reserved: HashSet<usize>   = reserved.into_iter().collect();
        let guaranteed: HashSet<usize> = guaranteed.into_iter().collect();

        let mut free: Vec<usize> = (0..cells).filter(|i| !reserved.contains(i)).collect();
        free.shuffle(rng);

        let remaining = prompts
            .iter()
            .enumerate()
            .filter(|(i, _)| !guaranteed.contains(i))
            .map(|(_, p)| p);

        for (prompt, pos) in remaining.zip(free) {
            grid[pos] = Some(prompt.clone());
        }

        Ok(Grid::from_cells(self.rows, self.cols, grid))
    }

    /// Row-major cell indices reserved by phase 1, in draw order
    fn guaranteed_positions<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<usize> {
        match self.mode {
            GuaranteeMode::Scattered => {
                index::sample(rng, self.rows * self.cols, self.rows).into_vec()
            }
            GuaranteeMode::RowStratified => index::sample(rng, self.rows, self.rows.min(n))
                .into_iter()
                .map(|row| row * self.cols + rng.gen_range(0..self.cols))
                .collect(),
        }
    }
}
