//! Command execution

use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use tracing::instrument;
use vaultweave_core::AnalysisConfig;
use vaultweave_export::ReportFormatter;
use vaultweave_graph::GraphAnalyzer;
use vaultweave_tools::{LinkTools, SuggestionEngine};
use vaultweave_vault::{ApplyMode, Corpus};

/// Resolve the analysis settings: YAML file first, then `--vault`.
pub fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(vault) = &cli.vault {
        config.root = vault.clone();
    }

    Ok(config)
}

/// Run the selected command and return the rendered report
#[instrument(skip(cli), fields(command = ?cli.command, format = %cli.format))]
pub fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    log::info!("Scanning vault at {}", config.root.display());
    let corpus = Corpus::load(&config)?;

    let output = match &cli.command {
        Command::Analyze => {
            let stats = GraphAnalyzer::new(&config).analyze(corpus.notes());
            ReportFormatter::analysis(&stats, cli.format)?
        }
        Command::Suggest { apply, dry_run } => {
            let suggestions = SuggestionEngine::from_config(&config)?.suggest(&corpus);
            if *apply {
                let report = LinkTools::new(&corpus, &config)?
                    .apply_all(&suggestions, ApplyMode::from_dry_run(*dry_run));
                ReportFormatter::apply(&report, cli.format)?
            } else {
                ReportFormatter::suggestions(&suggestions, cli.format)?
            }
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_with_vault_override() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("vaultweave.yaml");
        fs::write(&config_path, "root: /elsewhere\nmin_mention_len: 5\n").unwrap();

        let cli = Cli::parse_from([
            "vaultweave",
            "--config",
            config_path.to_str().unwrap(),
            "--vault",
            temp.path().to_str().unwrap(),
            "analyze",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.root, temp.path());
        assert_eq!(config.min_mention_len, 5);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from([
            "vaultweave",
            "--config",
            "/definitely/missing/vaultweave.yaml",
            "analyze",
        ]);
        let err = load_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load config"));
    }

    #[test]
    fn test_missing_vault_is_fatal() {
        let cli = Cli::parse_from(["vaultweave", "--vault", "/definitely/missing/vault", "analyze"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Vault path not found"));
    }
}
