//! Command implementations.

mod check;
mod show;
mod vars;

use anyhow::Result;

use crate::args::{Cli, Commands};

/// Dispatch the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check => check::run(cli),
        Commands::Show { output } => show::run(cli, *output),
        Commands::Vars { output } => vars::run(*output),
    }
}
