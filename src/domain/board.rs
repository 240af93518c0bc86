// ============================================================
// Layer 3 — Board Domain Types
// ============================================================
// BoardSpec       — how many boards, how many fields, grid size
// BoardPromptSet  — the N distinct prompts chosen for one board
// Grid            — those prompts placed on an R×C grid
//
// A Grid is built once by the layout step and never changed
// afterwards; the renderer only reads it.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use indexmap::IndexSet;

use crate::domain::error::BingoError;
use crate::domain::prompt::Prompt;

// ─── BoardSpec ────────────────────────────────────────────────────────────────
/// Validated board configuration: X boards of N fields on an R×C grid.
///
/// Construction checks everything that can be checked without
/// looking at the prompts, so a bad configuration fails before
/// any file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSpec {
    board_count:      usize,
    fields_per_board: usize,
    rows:             usize,
    cols:             usize,
    /// rows × cols, computed once without overflow
    cells:            usize,
    /// board_count × fields_per_board, computed once without overflow
    total_slots:      usize,
}

impl BoardSpec {
    pub fn new(
        board_count:      usize,
        fields_per_board: usize,
        rows:             usize,
        cols:             usize,
    ) -> Result<Self, BingoError> {
        if rows == 0 || cols == 0 {
            return Err(BingoError::EmptyGrid { rows, cols });
        }
        if fields_per_board == 0 {
            return Err(BingoError::NoFields);
        }
        let cells = rows
            .checked_mul(cols)
            .ok_or(BingoError::GridTooLarge { rows, cols })?;
        if fields_per_board > cells {
            return Err(BingoError::FieldsExceedCells {
                fields: fields_per_board,
                cells,
            });
        }
        if board_count == 0 {
            return Err(BingoError::NoBoards);
        }
        let total_slots = board_count
            .checked_mul(fields_per_board)
            .ok_or(BingoError::TooManySlots { boards: board_count, fields: fields_per_board })?;

        Ok(Self { board_count, fields_per_board, rows, cols, cells, total_slots })
    }

    pub fn board_count(&self) -> usize {
        self.board_count
    }

    pub fn fields_per_board(&self) -> usize {
        self.fields_per_board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells on one board (R×C)
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Total prompt slots across all boards (T = X×N)
    pub fn total_slots(&self) -> usize {
        self.total_slots
    }
}

// ─── BoardPromptSet ───────────────────────────────────────────────────────────
/// The distinct prompts drawn for one board, in draw order.
///
/// Draw order is kept (instead of hash order) so a seeded run
/// always lays out the same grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPromptSet {
    prompts: IndexSet<Prompt>,
}

impl BoardPromptSet {
    pub fn new(prompts: IndexSet<Prompt>) -> Self {
        Self { prompts }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get_index(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter()
    }
}

impl FromIterator<Prompt> for BoardPromptSet {
    fn from_iter<I: IntoIterator<Item = Prompt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ─── Grid ─────────────────────────────────────────────────────────────────────
/// An R×C bingo grid. Each cell holds a prompt or is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    /// Row-major cell storage, length rows * cols
    cells: Vec<Option<Prompt>>,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * cols`; the layout step
    /// always allocates exactly that many.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<Prompt>>) -> Self {
        assert_eq!(
            cells.len(),
            rows * cols,
            "grid of {}x{} needs {} cells",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate rows top to bottom; each row is a slice of cells
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<Prompt>]> {
        self.cells.chunks(self.cols)
    }

    /// Number of cells holding a prompt
    pub fn filled_count(&self) -> usize {
        self.prompts().count()
    }

    /// Number of distinct rows with at least one prompt
    pub fn covered_rows(&self) -> usize {
        self.iter_rows()
            .filter(|row| row.iter().any(Option::is_some))
            .count()
    }

    /// All prompts on the grid, in row-major order
    pub fn prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.cells.iter().flatten()
    }
}
