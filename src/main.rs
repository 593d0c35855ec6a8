//! CLI entry point for the exact binomial test

use binomtest::io::cli::Cli;
use clap::Parser;

fn main() -> binomtest::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
