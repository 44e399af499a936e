//! Show command: print every resolved value with secrets redacted.

use anyhow::{Context, Result};

use crate::args::Cli;
use crate::formatters::{self, OutputFormat};

pub fn run(cli: &Cli, output: OutputFormat) -> Result<()> {
    let config = cli
        .loader()
        .load_dotenv()
        .context("Failed to load env files")?
        .build()
        .context("Environment configuration is incomplete")?;

    let rendered = match output {
        OutputFormat::Json => formatters::to_json(&config)?,
        OutputFormat::Table => {
            let value = serde_json::to_value(&config)?;
            let rows: Vec<Vec<String>> = formatters::flatten(&value)
                .into_iter()
                .map(|(key, value)| vec![key, value])
                .collect();
            formatters::table(&["SETTING", "VALUE"], &rows)
        }
    };
    print!("{rendered}");
    if output == OutputFormat::Json {
        println!();
    }
    Ok(())
}
