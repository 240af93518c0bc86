// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   bingo-boards generate -i fields.txt -o bingo.tex -x 15 -n 8
//   bingo-boards check --config bingo.json
//
// This layer only routes and prints; nothing is computed here.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, RunArgs};

use crate::application::config::BingoConfig;
use crate::domain::error::BingoError;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "bingo-boards",
    version,
    about = "Generate randomized bingo boards from a prompt list as a LaTeX document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let result = match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Check(args)    => run_check(args),
        };
        if let Some(err) = result.as_ref().err().and_then(|e| e.downcast_ref::<BingoError>()) {
            tracing::debug!("Run failed with a {:?} error", err.kind());
        }
        result
    }
}

/// Defaults, then the config file if one was given, then flags
fn resolve_config(args: &RunArgs) -> Result<BingoConfig> {
    let base = match &args.config {
        Some(path) => ConfigStore::load(path)?,
        None       => BingoConfig::default(),
    };
    Ok(args.apply(base))
}

fn run_generate(args: RunArgs) -> Result<()> {
    use crate::application::generate_use_case::GenerateUseCase;

    let config = resolve_config(&args)?;
    tracing::info!("Generating boards from '{}'", config.input.display());

    let report = GenerateUseCase::new(config).execute()?;
    tracing::debug!("Run complete with seed {}", report.seed);

    println!(
        "Generated {} bingo boards ({} fields each) in '{}'.",
        report.boards,
        report.fields,
        report.output.display()
    );
    Ok(())
}

fn run_check(args: RunArgs) -> Result<()> {
    use crate::application::check_use_case::CheckUseCase;

    let config = resolve_config(&args)?;
    let report = CheckUseCase::new(config).execute()?;

    println!("{report}");
    println!("OK: configuration and prompts are valid.");
    Ok(())
}
