// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Every failure that ends a run. Three families:
//
//   Configuration — the requested boards cannot be built
//                   (caught before any prompt is sampled)
//   Input         — the prompt file or config file is unusable
//   Starvation    — a board kept drawing prompts it already had
//
// All of them are terminal: the document is never written
// when one of these is returned.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

/// The three error families a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Input,
    Starvation,
}

#[derive(Debug, Error)]
pub enum BingoError {
    #[error("fields per board must be at least 1 (got 0)")]
    NoFields,

    #[error("board count must be at least 1 (got 0)")]
    NoBoards,

    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has more cells than can be counted")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("{boards} boards x {fields} fields is more slots than can be counted")]
    TooManySlots { boards: usize, fields: usize },

    #[error("fields per board ({fields}) exceeds the {cells} cells of a board")]
    FieldsExceedCells { fields: usize, cells: usize },

    #[error(
        "requested slots ({requested}) are fewer than the {available} unique prompts; \
         increase the board count or fields per board"
    )]
    TooFewSlots { requested: usize, available: usize },

    #[error(
        "each board needs {fields} distinct prompts but only {unique} unique prompts are available"
    )]
    FieldsExceedPool { fields: usize, unique: usize },

    #[error("prompt file '{}' does not exist", .path.display())]
    InputMissing { path: PathBuf },

    #[error("cannot read prompt file '{}'", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt file '{}' contains no usable prompts", .path.display())]
    NoPrompts { path: PathBuf },

    #[error("the prompt pool is empty")]
    EmptyPool,

    #[error("cannot read config file '{}'", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{}' is not valid", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "board {board} could not be filled with {fields} distinct prompts \
         after {attempts} rejected draws in a row"
    )]
    Starvation {
        board: usize,
        fields: usize,
        attempts: usize,
    },
}

impl BingoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BingoError::NoFields
            | BingoError::NoBoards
            | BingoError::EmptyGrid { .. }
            | BingoError::GridTooLarge { .. }
            | BingoError::TooManySlots { .. }
            | BingoError::FieldsExceedCells { .. }
            | BingoError::TooFewSlots { .. }
            | BingoError::FieldsExceedPool { .. } => ErrorKind::Configuration,

            BingoError::InputMissing { .. }
            | BingoError::InputUnreadable { .. }
            | BingoError::NoPrompts { .. }
            | BingoError::EmptyPool
            | BingoError::ConfigUnreadable { .. }
            | BingoError::ConfigInvalid { .. } => ErrorKind::Input,

            BingoError::Starvation { .. } => ErrorKind::Starvation,
        }
    }
}
