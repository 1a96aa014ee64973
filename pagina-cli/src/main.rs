//! Command-line entry point for pagina

use clap::Parser;
use pagina_cli::{commands::Commands, CliResult};

/// Split long documents into bounded, individually addressable fragments
#[derive(Debug, Parser)]
#[command(name = "pagina", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
