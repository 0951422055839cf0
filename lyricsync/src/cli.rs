//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "lyr")]
#[command(about = "Correct ASR subtitles with reference lyrics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align a JSON transcript with reference lyrics and write SRT subtitles
    Align(crate::align::Args),

    /// Check that SRT subtitle text matches reference lyrics line by line
    Check(crate::check::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align(args) => crate::align::execute(args.try_into()?),
        Commands::Check(args) => crate::check::execute(args.into()),
    }
}
