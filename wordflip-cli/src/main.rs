//! wordflip command-line entry point

use clap::Parser;
use wordflip_cli::commands::Commands;

/// Reverse word order while separators keep their mirrored positions
#[derive(Debug, Parser)]
#[command(name = "wordflip", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
