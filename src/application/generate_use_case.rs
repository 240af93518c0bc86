// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Runs the whole pipeline in order:
//
//   Step 1: Validate board dimensions     (Layer 3 - domain)
//   Step 2: Load prompts                  (Layer 4 - data)
//   Step 3: Build the pool, check sizes   (Layer 4 - data)
//   Step 4: Seed the random generator
//   Step 5: Build the shuffled deck       (Layer 4 - data)
//   Step 6: Deal prompt sets              (Layer 5 - board)
//   Step 7: Lay out grids                 (Layer 5 - board)
//   Step 8: Render the document           (Layer 6 - infra)
//   Step 9: Write it to disk              (Layer 6 - infra)
//
// Any error before Step 9 ends the run with no file written.

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use crate::application::config::BingoConfig;
use crate::board::{layout::BoardLayout, sampler::BoardSampler};
use crate::data::{loader::LinePromptLoader, pool::PromptPool};
use crate::domain::board::{BoardSpec, Grid};
use crate::domain::traits::{DocumentRenderer, PromptSource};
use crate::infra::{latex::LatexRenderer, output::DocumentWriter};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub boards: usize,
    pub fields: usize,
    pub output: PathBuf,
    pub seed:   u64,
}

/// A rendered document that has not been written yet
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub text: String,
    pub seed: u64,
}

pub struct GenerateUseCase {
    config: BingoConfig,
}

impl GenerateUseCase {
    pub fn new(config: BingoConfig) -> Self {
        Self { config }
    }

    /// Generate from the configured prompt file and write the document.
    pub fn execute(&self) -> Result<GenerateReport> {
        let cfg = &self.config;

        // ── Step 1: Validate before touching any file ─────────────────────────
        let spec = cfg.board_spec()?;

        // ── Steps 2–8 ─────────────────────────────────────────────────────────
        let loader   = LinePromptLoader::new(&cfg.input);
        let rendered = self.render(&loader, &spec)?;

        // ── Step 9: Write once, only after everything succeeded ───────────────
        let writer = DocumentWriter::new(&cfg.output);
        writer.write(&rendered.text)?;

        Ok(GenerateReport {
            boards: spec.board_count(),
            fields: spec.fields_per_board(),
            output: writer.path().clone(),
            seed:   rendered.seed,
        })
    }

    /// Produce the document text from any prompt source.
    pub fn render(&self, source: &dyn PromptSource, spec: &BoardSpec) -> Result<RenderedDocument> {
        let cfg = &self.config;

        // ── Steps 2–3: prompts and pool ───────────────────────────────────────
        let pool = load_pool(source, spec)?;

        // ── Step 4: one seeded generator for the whole run ────────────────────
        let seed = resolve_seed(cfg.seed);
        tracing::info!("Using seed {} (pass --seed {} to reproduce)", seed, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // ── Steps 5–7: deck, prompt sets, grids ───────────────────────────────
        let grids = self.build_boards(&pool, spec, &mut rng)?;

        // ── Step 8: render ────────────────────────────────────────────────────
        let renderer = LatexRenderer::new(cfg.theme.clone());
        let text     = renderer.render(&grids).context("Cannot render document")?;
        Ok(RenderedDocument { text, seed })
    }

    /// Deal and lay out every board. Boards are built strictly in
    /// order because they share one deck.
    pub fn build_boards<R: Rng + ?Sized>(
        &self,
        pool: &PromptPool,
        spec: &BoardSpec,
        rng:  &mut R,
    ) -> Result<Vec<Grid>> {
        let mut deck = pool.sample_to_target(spec.total_slots(), rng)?;

        let sampler = BoardSampler::new(pool, spec.fields_per_board(), self.config.max_retries)?;
        let sets    = sampler.sample_boards(spec.board_count(), &mut deck, rng)?;

        let layout = BoardLayout::from_spec(spec, self.config.guarantee);
        let grids = sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                layout
                    .place(set, rng)
                    .with_context(|| format!("Cannot lay out board {}", i + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        for (i, grid) in grids.iter().enumerate() {
            tracing::debug!(
                "Board {}: {} prompts placed, {} of {} rows covered",
                i + 1,
                grid.filled_count(),
                grid.covered_rows(),
                grid.rows()
            );
        }
        tracing::info!(
            "Built {} boards of {} fields on a {}x{} grid",
            grids.len(),
            spec.fields_per_board(),
            spec.rows(),
            spec.cols()
        );
        Ok(grids)
    }
}

/// Load prompts into a pool and check the pool can serve `spec`.
pub fn load_pool(source: &dyn PromptSource, spec: &BoardSpec) -> Result<PromptPool> {
    let prompts = source.load_prompts()?;
    let pool    = PromptPool::new(prompts)?;
    pool.check_capacity(spec)?;

    tracing::info!(
        "Pool: {} unique prompts for {} slots ({} boards x {} fields)",
        pool.len(),
        spec.total_slots(),
        spec.board_count(),
        spec.fields_per_board()
    );
    Ok(pool)
}

/// A configured seed, or a fresh one from the thread-local generator
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}
