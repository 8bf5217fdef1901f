//! vaultweave CLI

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vaultweave::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides; otherwise the -v count picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    log::debug!("vaultweave v{}", env!("CARGO_PKG_VERSION"));

    match vaultweave::run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
