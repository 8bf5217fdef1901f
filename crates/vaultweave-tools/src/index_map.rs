//! Category → index note (MOC) mapping

use std::collections::BTreeMap;
use vaultweave_core::prelude::*;

/// Maps categories to the index note that should be linked from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    mapping: BTreeMap<String, String>,
    root_category: String,
}

impl CategoryIndex {
    /// Scan the index directory (non-recursive) and classify its notes.
    ///
    /// A missing index directory yields an empty mapping.
    pub fn build(config: &AnalysisConfig) -> Result<Self> {
        let index_dir = config.index_dir();
        if !index_dir.is_dir() {
            log::debug!("No index directory at {}", index_dir.display());
            return Ok(Self::from_titles(Vec::<String>::new(), config));
        }

        let mut titles = Vec::new();
        for entry in std::fs::read_dir(&index_dir).map_err(Error::io)? {
            let path = entry.map_err(Error::io)?.path();
            let is_note = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy() == config.extension);
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if is_note && !stem.starts_with(&config.hidden_prefix) {
                titles.push(stem);
            }
        }
        titles.sort();

        let index = Self::from_titles(titles, config);
        log::info!("Mapped {} categories to index notes", index.len());
        Ok(index)
    }

    /// Classify index note titles with the configured keyword rules.
    ///
    /// For each title the first matching rule decides the category; titles
    /// matching no rule are ignored. A category keeps the first title that
    /// claims it.
    pub fn from_titles<I, S>(titles: I, config: &AnalysisConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping = BTreeMap::new();
        for title in titles {
            let title = title.into();
            match config.category_rules.iter().find(|rule| rule.matches(&title)) {
                Some(rule) => {
                    mapping
                        .entry(rule.category.clone())
                        .or_insert_with(|| title.clone());
                }
                None => log::debug!("Index note '{}' matches no category rule", title),
            }
        }

        Self {
            mapping,
            root_category: config.root_category.clone(),
        }
    }

    /// Index note that a note in `category` should link to.
    /// Root-level notes never get one.
    pub fn index_for(&self, category: &str) -> Option<&str> {
        if category == self.root_category {
            return None;
        }
        self.mapping.get(category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
