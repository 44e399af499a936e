//! twin-env - inspect the digital twin's environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load env files and resolve the configuration exactly as the
//!   application does at startup.
//! - Report the result for operators and deployment scripts.
//!
//! Does NOT handle:
//! - Resolution rules (see the `twin-config` crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Secret values are never printed.

mod args;
mod commands;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if let Err(e) = commands::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }

    std::process::exit(ExitCode::Success.as_i32());
}
