// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// A dry run: validates the configuration and the prompt file
// and reports how the prompts would be spread, without
// sampling anything or writing a document.

use anyhow::Result;
use std::fmt;

use crate::application::config::BingoConfig;
use crate::application::generate_use_case::load_pool;
use crate::data::loader::LinePromptLoader;
use crate::domain::traits::PromptSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub boards:             usize,
    pub fields:             usize,
    pub cells:              usize,
    pub unique_prompts:     usize,
    pub duplicates_dropped: usize,
    pub slots:              usize,
}

impl CheckReport {
    /// Random extra draws needed to fill every slot (T − L)
    pub fn extra_draws(&self) -> usize {
        self.slots - self.unique_prompts
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "boards:          {} x {} fields ({} cells each)",
            self.boards, self.fields, self.cells
        )?;
        writeln!(
            f,
            "unique prompts:  {} ({} duplicate lines dropped)",
            self.unique_prompts, self.duplicates_dropped
        )?;
        writeln!(f, "slots:           {}", self.slots)?;
        write!(f, "extra draws:     {}", self.extra_draws())
    }
}

pub struct CheckUseCase {
    config: BingoConfig,
}

impl CheckUseCase {
    pub fn new(config: BingoConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let loader = LinePromptLoader::new(&self.config.input);
        self.check(&loader)
    }

    pub fn check(&self, source: &dyn PromptSource) -> Result<CheckReport> {
        let spec = self.config.board_spec()?;
        let pool = load_pool(source, &spec)?;

        Ok(CheckReport {
            boards:             spec.board_count(),
            fields:             spec.fields_per_board(),
            cells:              spec.cells(),
            unique_prompts:     pool.len(),
            duplicates_dropped: pool.duplicates_dropped(),
            slots:              spec.total_slots(),
        })
    }
}
