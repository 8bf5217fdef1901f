//! Core data models representing vault notes and link suggestions.
//!
//! These types are designed to be:
//! - **Serializable**: report-facing types derive Serialize/Deserialize
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Type-Safe**: Enums replace magic strings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// A note in the vault, identified by its filename stem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Filename stem, unique within the corpus
    pub title: String,
    /// Path relative to the vault root
    pub path: PathBuf,
    /// Top-level directory name, or the root category for top-level notes
    pub category: String,
    /// File size in bytes
    pub size: u64,
    /// Decoded text content
    #[serde(skip)]
    pub content: String,
    /// Wikilink targets exactly as written (alias dropped, duplicates collapsed)
    #[serde(skip)]
    pub links: BTreeSet<String>,
}

impl Note {
    /// Create a new note without any extracted links
    pub fn new(
        title: impl Into<String>,
        path: impl Into<PathBuf>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            title: title.into(),
            path: path.into(),
            category: category.into(),
            size: content.len() as u64,
            content,
            links: BTreeSet::new(),
        }
    }

    /// Attach the extracted link targets
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the note already links to `target` in raw (unstripped) form
    pub fn links_to(&self, target: &str) -> bool {
        self.links.contains(target)
    }
}

/// Kind of suggested link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Title mentioned in plain text but not linked
    Mention,
    /// Category index note (MOC) not linked
    Index,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Mention => write!(f, "mention"),
            SuggestionKind::Index => write!(f, "index"),
        }
    }
}

/// A proposed link that is not yet present in a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Title to link to
    pub target: String,
    /// Character offset of the mention in the source note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Human-readable justification
    pub reason: String,
}

impl Suggestion {
    /// Suggest linking an unlinked mention found at `position`
    pub fn mention(target: impl Into<String>, position: usize) -> Self {
        let target = target.into();
        Self {
            kind: SuggestionKind::Mention,
            reason: format!("'{}' mentioned but not linked", target),
            target,
            position: Some(position),
        }
    }

    /// Suggest linking the note's category index
    pub fn index(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            kind: SuggestionKind::Index,
            reason: format!("Should link to [[{}]] MOC", target),
            target,
            position: None,
        }
    }
}
