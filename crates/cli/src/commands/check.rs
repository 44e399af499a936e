//! Check command: resolve the configuration and report success or the first failure.

use anyhow::{Context, Result};
use tracing::info;

use crate::args::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let loader = cli
        .loader()
        .load_dotenv()
        .context("Failed to load env files")?;
    let config = loader
        .build()
        .context("Environment configuration is incomplete")?;

    info!(
        land_file_set = config.elevation.land_file.is_some(),
        "Configuration check passed"
    );
    println!("configuration OK");
    Ok(())
}
