//! CLI entry point for slicing images and playing grid puzzles

use clap::Parser;
use gridpuzzle::io::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn init_tracing(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if quiet { "warn" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> gridpuzzle::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    let mut runner = Runner::new(cli);
    runner.run()
}
