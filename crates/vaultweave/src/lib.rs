//! # vaultweave
//!
//! Command-line front end for vault link analysis.
//!
//! ```text
//! vaultweave --vault ~/notes analyze --format html
//! vaultweave --vault ~/notes suggest
//! vaultweave --vault ~/notes suggest --apply --dry-run
//! ```
//!
//! Every run scans the vault from scratch; nothing is cached between runs.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{load_config, run};
