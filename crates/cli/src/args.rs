//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build a `ConfigLoader` from the env file options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use twin_config::ConfigLoader;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "twin-env")]
#[command(
    about = "Validate and inspect the flood digital twin's environment configuration",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  twin-env check\n  twin-env --env-file deploy.env check\n  twin-env show --output json\n  twin-env vars\n"
)]
pub struct Cli {
    /// Env file to load instead of .env and api_keys.env (repeatable; earlier files win)
    #[arg(long = "env-file", global = true, value_name = "PATH")]
    pub env_files: Vec<PathBuf>,

    /// Do not load any env file (takes precedence over --env-file)
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "TWIN_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the configuration and report whether it is complete
    Check,

    /// Resolve the configuration and print every value, secrets redacted
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// List every recognised variable and how it is resolved
    Vars {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

impl Cli {
    /// Loader for the env files selected on the command line.
    pub fn loader(&self) -> ConfigLoader {
        if self.no_dotenv {
            ConfigLoader::new().with_env_files(Vec::<PathBuf>::new())
        } else if self.env_files.is_empty() {
            ConfigLoader::new()
        } else {
            ConfigLoader::new().with_env_files(self.env_files.iter().cloned())
        }
    }
}
