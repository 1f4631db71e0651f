//! CLI entry point for the polyomino packing solver

use clap::Parser;
use polypack::io::cli::{Cli, PuzzleRunner};
use tracing_subscriber::EnvFilter;

fn main() -> polypack::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let runner = PuzzleRunner::new(cli);
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())?;
    Ok(())
}
