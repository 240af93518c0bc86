// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands share one set of flags:
//
//   generate — build the boards and write the LaTeX document
//   check    — validate config and prompts, write nothing
//
// Every flag is optional: an unset flag keeps the value from
// the config file (or the built-in default).

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::config::BingoConfig;
use crate::board::layout::GuaranteeMode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate bingo boards and write them as a LaTeX document
    Generate(RunArgs),

    /// Validate configuration and prompt file without writing anything
    Check(RunArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// JSON config file; flags given here override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prompt file, one prompt per line [default: fields.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output .tex file [default: bingo_tables.tex]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of boards [default: 15]
    #[arg(short = 'x', long = "boards")]
    pub boards: Option<usize>,

    /// Filled cells per board [default: 8]
    #[arg(short = 'n', long = "fields")]
    pub fields: Option<usize>,

    /// Grid rows [default: 5]
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns [default: 5]
    #[arg(long)]
    pub cols: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the first placement pass spreads prompts over rows
    #[arg(long, value_enum)]
    pub guarantee: Option<GuaranteeArg>,

    /// Give up on a board after this many rejected draws in a row [default: 10000]
    #[arg(long, conflicts_with = "unbounded_retries")]
    pub max_retries: Option<usize>,

    /// Never give up on a board
    #[arg(long)]
    pub unbounded_retries: bool,
}

/// Command-line spelling of GuaranteeMode
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuaranteeArg {
    /// Row-count positions anywhere on the grid
    Scattered,
    /// One position in each of min(rows, fields) distinct rows
    RowStratified,
}

impl From<GuaranteeArg> for GuaranteeMode {
    fn from(a: GuaranteeArg) -> Self {
        match a {
            GuaranteeArg::Scattered     => GuaranteeMode::Scattered,
            GuaranteeArg::RowStratified => GuaranteeMode::RowStratified,
        }
    }
}

impl RunArgs {
    /// Layer the flags that were given on top of `base`.
    /// The application layer never sees clap types.
    pub fn apply(&self, mut base: BingoConfig) -> BingoConfig {
        if let Some(v) = &self.input  { base.input = v.clone(); }
        if let Some(v) = &self.output { base.output = v.clone(); }
        if let Some(v) = self.boards  { base.board_count = v; }
        if let Some(v) = self.fields  { base.fields_per_board = v; }
        if let Some(v) = self.rows    { base.rows = v; }
        if let Some(v) = self.cols    { base.cols = v; }
        if let Some(v) = self.seed    { base.seed = Some(v); }
        if let Some(v) = self.guarantee { base.guarantee = v.into(); }
        if let Some(v) = self.max_retries { base.max_retries = Some(v); }
        if self.unbounded_retries {
            base.max_retries = None;
        }
        base
    }
}
