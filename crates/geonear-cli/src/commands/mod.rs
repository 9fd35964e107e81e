//! Command implementations

mod config;
mod inspect;
mod nearest;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match &cli.command {
        Commands::Nearest(args) => nearest::execute(&cli, args, &output),
        Commands::Inspect => inspect::execute(&cli, &output),
        Commands::Config => config::execute(&cli, &output),
    }
}
