mod application;
mod board;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
