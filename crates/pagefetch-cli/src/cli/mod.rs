//! CLI for the pagefetch concurrent fetcher.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagefetch_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, FetchArgs};

/// Top-level CLI for pagefetch.
#[derive(Debug, Parser)]
#[command(name = "pagefetch")]
#[command(about = "pagefetch: fetch pages concurrently and print labeled text records", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/pagefetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch URLs and print one labeled record per distinct URL.
    Fetch {
        /// HTTP/HTTPS URLs to fetch.
        urls: Vec<String>,
        /// Read descriptors from a file: `URL<TAB>LABEL` per line, or a JSON array when the name ends in `.json`.
        #[arg(long, short = 'f', value_name = "PATH")]
        file: Option<PathBuf>,
        /// Maximum concurrent fetches (default from config).
        #[arg(long, short = 'w', value_name = "N")]
        workers: Option<usize>,
        /// Print the result mapping as JSON instead of text records.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                urls,
                file,
                workers,
                json,
            } => {
                let args = FetchArgs {
                    urls,
                    file,
                    workers,
                    json,
                };
                run_fetch(&cfg, args).await?;
            }
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
