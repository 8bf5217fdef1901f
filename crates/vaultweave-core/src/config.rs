//! Configuration types for vault analysis.
//!
//! Follows a builder pattern for complex configuration with validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maps an index-note name keyword to the category it represents.
///
/// Rules are evaluated in declaration order and the first keyword contained
/// (case-insensitively) in the index note's title wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }

    /// Whether this rule applies to the given index note title
    pub fn matches(&self, title: &str) -> bool {
        title
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }
}

/// Settings for a single analysis run over one vault
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Path to the vault directory
    pub root: PathBuf,
    /// Note file extension, without the leading dot
    pub extension: String,
    /// Directory holding category index notes (MOCs); exempt from orphan detection
    pub index_category: String,
    /// Category assigned to notes at the vault root; exempt from orphan detection
    pub root_category: String,
    /// Path components starting with this prefix are skipped while scanning
    pub hidden_prefix: String,
    /// Titles shorter than this (in characters) are never suggested as mentions
    pub min_mention_len: usize,
    /// Number of entries kept in the most-connected ranking
    pub top_n: usize,
    /// Heading line under which applied links are inserted
    pub related_heading: String,
    /// Ordered keyword rules for mapping index notes to categories
    pub category_rules: Vec<CategoryRule>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "md".to_string(),
            index_category: "MOC".to_string(),
            root_category: "root".to_string(),
            hidden_prefix: ".".to_string(),
            min_mention_len: 3,
            top_n: 10,
            related_heading: "## Related".to_string(),
            category_rules: vec![
                CategoryRule::new("ideas", "thoughts"),
                CategoryRule::new("learnings", "thoughts"),
                CategoryRule::new("reflections", "thoughts"),
                CategoryRule::new("projects", "projects"),
                CategoryRule::new("goals", "goals"),
            ],
        }
    }
}

impl AnalysisConfig {
    /// Create a config with defaults for the given vault root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Create a new config with builder
    pub fn builder(root: impl Into<PathBuf>) -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new(root)
    }

    /// Directory holding the category index notes
    pub fn index_dir(&self) -> PathBuf {
        self.root.join(&self.index_category)
    }

    /// Whether a category is exempt from orphan detection
    pub fn is_exempt_category(&self, category: &str) -> bool {
        category == self.index_category || category == self.root_category
    }

    /// Validate the configuration.
    ///
    /// A missing root is reported as [`Error::VaultNotFound`], the one
    /// condition that aborts a run.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Error::vault_not_found(&self.root));
        }

        if !self.root.is_dir() {
            return Err(Error::invalid_path(format!(
                "Vault path is not a directory: {}",
                self.root.display()
            )));
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::config_error(
                "extension must be non-empty and given without a leading dot",
            ));
        }

        if self.hidden_prefix.is_empty() {
            return Err(Error::config_error("hidden_prefix cannot be empty"));
        }

        if self.related_heading.trim().is_empty() {
            return Err(Error::config_error("related_heading cannot be empty"));
        }

        Ok(())
    }

    /// Load overrides from a YAML file. Keys absent from the file keep
    /// their defaults; `root` is replaced by the caller when given.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))
    }
}

/// Builder for AnalysisConfig
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Create a new builder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: AnalysisConfig::new(root),
        }
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.config.extension = extension.into();
        self
    }

    pub fn index_category(mut self, category: impl Into<String>) -> Self {
        self.config.index_category = category.into();
        self
    }

    pub fn min_mention_len(mut self, len: usize) -> Self {
        self.config.min_mention_len = len;
        self
    }

    pub fn top_n(mut self, n: usize) -> Self {
        self.config.top_n = n;
        self
    }

    pub fn related_heading(mut self, heading: impl Into<String>) -> Self {
        self.config.related_heading = heading.into();
        self
    }

    pub fn category_rules(mut self, rules: Vec<CategoryRule>) -> Self {
        self.config.category_rules = rules;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<AnalysisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
