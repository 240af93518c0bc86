// ============================================================
// Layer 5 — Board Sampler
// ============================================================
// Deals the shuffled deck out into one prompt set per board.
//
// For each board, in order:
//   1. Pop the next prompt off the end of the deck.
//      If the deck is empty, pick a random prompt from the pool.
//   2. If the board already has that prompt, throw it away
//      and draw again.
//   3. Stop once the board holds N distinct prompts.
//
// The deck is shared by all boards and drained strictly in
// board order: board i finishes before board i+1 draws.
// Discarded prompts are gone for good, which is why a board
// can run the deck dry and fall back to random picks.
//
// Two guards keep the loop finite:
//   - N may not exceed the number of unique prompts
//   - after `max_retries` rejected draws in a row the board
//     is declared starved and the run fails

use indexmap::IndexSet;
use rand::Rng;

use crate::data::pool::PromptPool;
use crate::domain::board::BoardPromptSet;
use crate::domain::error::BingoError;
use crate::domain::prompt::Prompt;

/// Default cap on consecutive rejected draws for one board
pub const DEFAULT_MAX_RETRIES: usize = 10_000;

pub struct BoardSampler<'a> {
    pool:        &'a PromptPool,
    fields:      usize,
    /// None = retry without limit
    max_retries: Option<usize>,
}

impl<'a> BoardSampler<'a> {
    /// # Errors
    /// `NoFields` for N = 0, `FieldsExceedPool` when N > L.
    pub fn new(
        pool:        &'a PromptPool,
        fields:      usize,
        max_retries: Option<usize>,
    ) -> Result<Self, BingoError> {
        if fields == 0 {
            return Err(BingoError::NoFields);
        }
        if fields > pool.len() {
            return Err(BingoError::FieldsExceedPool {
                fields,
                unique: pool.len(),
            });
        }
        Ok(Self { pool, fields, max_retries })
    }

    /// Deal `board_count` prompt sets from `deck`, one board at a time.
    pub fn sample_boards<R: Rng + ?Sized>(
        &self,
        board_count: usize,
        deck:        &mut Vec<Prompt>,
        rng:         &mut R,
    ) -> Result<Vec<BoardPromptSet>, BingoError> {
        let mut boards = Vec::with_capacity(board_count);
        for board in 1..=board_count {
            let set = self.draw_board(board, deck, rng)?;
            tracing::debug!(
                "Board {}: {} prompts drawn, {} left in deck",
                board,
                set.len(),
                deck.len()
            );
            boards.push(set);
        }
        Ok(boards)
    }

    /// Draw N distinct prompts for one board (`board` is 1-based,
    /// used only for error reporting).
    pub fn draw_board<R: Rng + ?Sized>(
        &self,
        board: usize,
        deck:  &mut Vec<Prompt>,
        rng:   &mut R,
    ) -> Result<BoardPromptSet, BingoError> {
        let mut chosen: IndexSet<Prompt> = IndexSet::with_capacity(self.fields);
        let mut rejected_in_a_row = 0usize;

        while chosen.len() < self.fields {
            let candidate = match deck.pop() {
                Some(p) => p,
                None => self.pool.choose(rng).clone(),
            };

            if chosen.insert(candidate) {
                rejected_in_a_row = 0;
                continue;
            }

            rejected_in_a_row += 1;
            if let Some(limit) = self.max_retries {
                if rejected_in_a_row > limit {
                    return Err(BingoError::Starvation {
                        board,
                        fields:   self.fields,
                        attempts: rejected_in_a_row,
                    });
                }
            }
        }

        Ok(BoardPromptSet::new(chosen))
    }
}
