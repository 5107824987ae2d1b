#![deny(missing_docs)]

//! # OpenAPI Typegen CLI
//!
//! Command Line Interface for compiling OpenAPI documents into TypeScript types.
//!
//! Supported Commands:
//! - `generate`: Document -> schemas/params/endpoints/index modules on disk.
//! - `inspect`: Lists the preprocessed operations the generators will see.
//!
//! Logging goes to stderr and is controlled by `TYPEGEN_LOG` (e.g. `debug`,
//! `typegen_core=debug,info`).

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::executor::ShellExecutor;

mod config;
mod error;
mod executor;
mod generate;
mod inspect;
mod renderer;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TYPEGEN_LOG";

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to TypeScript type generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate TypeScript modules from an OpenAPI document.
    Generate(generate::GenerateArgs),
    /// Print the operations found in an OpenAPI document.
    Inspect(inspect::InspectArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            let executor = ShellExecutor;
            generate::execute(args, &executor)?;
        }
        Commands::Inspect(args) => inspect::execute(args)?,
    }

    Ok(())
}
