//! caseswitch command-line entry point

use caseswitch_cli::commands::Commands;
use caseswitch_cli::CliResult;
use clap::Parser;

/// Locale-aware text case transformations
#[derive(Debug, Parser)]
#[command(name = "caseswitch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
