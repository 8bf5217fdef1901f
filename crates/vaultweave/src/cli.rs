//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use vaultweave_export::OutputFormat;

/// vaultweave - link graph analysis and link suggestions for note vaults
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the vault directory (defaults to the current directory)
    #[arg(long, global = true, env = "VAULTWEAVE_ROOT")]
    pub vault: Option<PathBuf>,

    /// YAML file with analysis settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, html, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report link graph statistics, orphans and category averages
    Analyze,

    /// Suggest missing links, optionally writing them into notes
    Suggest {
        /// Add every suggested link under the "Related" heading
        #[arg(long)]
        apply: bool,

        /// With --apply, only report what would change
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Default log filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
