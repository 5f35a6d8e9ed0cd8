//! CLI for the mnav navigator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mnav_core::config;

use commands::{run_open, run_repl};

/// Top-level CLI for mnav.
#[derive(Debug, Parser)]
#[command(name = "mnav")]
#[command(about = "mnav: fetch an address and show the raw response", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Navigate once and print the response body.
    Open {
        /// Address to open; `example.com` means `https://example.com`.
        /// Defaults to the configured home URL.
        input: Option<String>,
    },

    /// Interactive address bar: every line navigates, superseding the one in flight.
    Repl,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Open { input } => run_open(&cfg, input.as_deref()).await?,
            CliCommand::Repl => run_repl(&cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
