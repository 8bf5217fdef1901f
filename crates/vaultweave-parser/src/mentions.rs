//! Unlinked mention detection.
//!
//! Finds plain-text occurrences of other notes' titles that are not yet
//! wrapped in a wikilink. This only produces candidates; content is never
//! modified here.

use crate::wikilinks::extract_links;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// An occurrence of a known title in a note's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Title that was mentioned
    pub title: String,
    /// Character (not byte) offset of the match in the content
    pub offset: usize,
}

/// A title with its compiled case-insensitive `\b…\b` pattern.
///
/// Compile once per run with [`MentionFinder::compile`] and reuse the
/// patterns for every note.
#[derive(Debug, Clone)]
pub struct TitlePattern {
    title: String,
    regex: Regex,
}

impl TitlePattern {
    pub fn new(title: &str) -> Option<Self> {
        match RegexBuilder::new(&format!(r"\b{}\b", regex::escape(title)))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Some(Self {
                title: title.to_string(),
                regex,
            }),
            Err(e) => {
                log::warn!("Skipping mention search for '{}': {}", title, e);
                None
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Case-insensitive whole-word matcher for note titles
pub struct MentionFinder {
    min_len: usize,
}

impl MentionFinder {
    /// Create a finder ignoring titles shorter than `min_len` characters
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Compile patterns for every title at or above the length floor,
    /// keeping the given order
    pub fn compile<'a, I>(&self, titles: I) -> Vec<TitlePattern>
    where
        I: IntoIterator<Item = &'a str>,
    {
        titles
            .into_iter()
            .filter(|title| title.chars().count() >= self.min_len)
            .filter_map(TitlePattern::new)
            .collect()
    }

    /// Find every mention of `titles` in `content`.
    ///
    /// Compiles the titles on each call; use [`MentionFinder::compile`]
    /// with [`MentionFinder::find_with`] when scanning many notes.
    pub fn find<'a, I>(&self, content: &str, titles: I) -> Vec<Mention>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = self.compile(titles);
        self.find_with(content, &patterns)
    }

    /// Find mentions using precompiled patterns.
    ///
    /// Titles already linked from the content (raw target form) and titles
    /// below the length floor are skipped. Each occurrence is reported
    /// separately, grouped by title in pattern order.
    pub fn find_with<'p, I>(&self, content: &str, patterns: I) -> Vec<Mention>
    where
        I: IntoIterator<Item = &'p TitlePattern>,
    {
        let existing = extract_links(content);
        let mut mentions = Vec::new();

        for pattern in patterns {
            let title = pattern.title();
            if existing.contains(title) || title.chars().count() < self.min_len {
                continue;
            }

            // Byte offsets are converted incrementally to keep long notes linear
            let mut chars = 0;
            let mut last = 0;
            for m in pattern.regex.find_iter(content) {
                chars += content[last..m.start()].chars().count();
                last = m.start();
                mentions.push(Mention {
                    title: title.to_string(),
                    offset: chars,
                });
            }
        }

        mentions
    }
}

impl Default for MentionFinder {
    fn default() -> Self {
        Self::new(3)
    }
}
