//! # vaultweave Core
//!
//! Core data models, error types, and configuration for vault link analysis.
//! This crate defines the canonical types that all other crates depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Vault data types ([`Note`], [`Suggestion`], [`SuggestionKind`])
//! - [`error`] - Error types and the [`Result`] alias
//! - [`config`] - [`AnalysisConfig`] and its builder
//!
//! ## Usage Examples
//!
//! ```
//! use vaultweave_core::prelude::*;
//!
//! let note = Note::new("Rust", "learnings/Rust.md", "learnings", "See [[Cargo]]")
//!     .with_links(["Cargo"]);
//! assert!(note.links_to("Cargo"));
//!
//! let config = AnalysisConfig::default();
//! assert_eq!(config.min_mention_len, 3);
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::{AnalysisConfig, AnalysisConfigBuilder, CategoryRule};
pub use error::{Error, Result};
pub use models::{Note, Suggestion, SuggestionKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{AnalysisConfig, CategoryRule};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Note, Suggestion, SuggestionKind};
}
