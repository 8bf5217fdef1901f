//! # Report Rendering
//!
//! Renders vault analysis and link suggestions in three formats:
//!
//! - **Text**: a markdown report for terminals and notes
//! - **HTML**: a condensed report for chat surfaces (Telegram-style tags),
//!   with top-N lists truncated and an explicit "N more" line
//! - **JSON**: a pretty-printed dump of the full statistics or suggestion map
//!
//! ## Quick Start
//!
//! ```
//! use vaultweave_core::{AnalysisConfig, Note};
//! use vaultweave_export::{OutputFormat, ReportFormatter};
//! use vaultweave_graph::GraphAnalyzer;
//!
//! let notes = vec![
//!     Note::new("A", "thoughts/A.md", "thoughts", "[[B]]").with_links(["B"]),
//!     Note::new("B", "thoughts/B.md", "thoughts", ""),
//! ];
//! let config = AnalysisConfig::default();
//! let stats = GraphAnalyzer::new(&config).analyze(&notes);
//!
//! let text = ReportFormatter::analysis(&stats, OutputFormat::Text).unwrap();
//! assert!(text.contains("- **Total links:** 1"));
//! ```
//!
//! Renderers are pure: they take computed results and return strings.
//! Printing and file I/O belong to the caller.

pub mod analysis_report;
pub mod suggestion_report;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use vaultweave_core::prelude::*;
use vaultweave_graph::VaultStats;
use vaultweave_tools::{ApplyReport, SuggestionMap};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown report (default)
    #[default]
    Text,
    /// Condensed HTML for chat surfaces
    Html,
    /// Pretty-printed JSON dump
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format '{}'. Valid options: text, html, json",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Dispatches to the renderer for the requested format
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render graph analysis results
    pub fn analysis(stats: &VaultStats, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(analysis_report::to_text(stats)),
            OutputFormat::Html => Ok(analysis_report::to_html(stats)),
            OutputFormat::Json => to_json_string(stats, "vault analysis"),
        }
    }

    /// Render link suggestions
    pub fn suggestions(suggestions: &SuggestionMap, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(suggestion_report::to_text(suggestions)),
            OutputFormat::Html => Ok(suggestion_report::to_html(suggestions)),
            OutputFormat::Json => to_json_string(suggestions, "link suggestions"),
        }
    }

    /// Render the outcome of applying suggestions.
    /// HTML has no dedicated layout and falls back to text.
    pub fn apply(report: &ApplyReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text | OutputFormat::Html => Ok(suggestion_report::apply_to_text(report)),
            OutputFormat::Json => to_json_string(report, "apply report"),
        }
    }
}

fn to_json_string<T: Serialize + ?Sized>(data: &T, context: &str) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| Error::serialization(format!("Failed to serialize {} as JSON: {}", context, e)))
}
