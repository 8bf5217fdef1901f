//! Link suggestions: unlinked mentions and missing category index links.

use crate::index_map::CategoryIndex;
use std::collections::BTreeMap;
use vaultweave_core::prelude::*;
use vaultweave_parser::{MentionFinder, TitlePattern};
use vaultweave_vault::Corpus;

/// Suggestions keyed by note title. Notes without suggestions are absent.
pub type SuggestionMap = BTreeMap<String, Vec<Suggestion>>;

/// Computes link suggestions for every note of a corpus
pub struct SuggestionEngine {
    finder: MentionFinder,
    index: CategoryIndex,
}

impl SuggestionEngine {
    pub fn new(config: &AnalysisConfig, index: CategoryIndex) -> Self {
        Self {
            finder: MentionFinder::new(config.min_mention_len),
            index,
        }
    }

    /// Build the engine, reading index notes from the vault
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self::new(config, CategoryIndex::build(config)?))
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Suggestions for all notes.
    ///
    /// Title patterns are compiled once and shared by every note. Notes
    /// sharing a title accumulate under the same key, in scan order.
    pub fn suggest(&self, corpus: &Corpus) -> SuggestionMap {
        let patterns = self.finder.compile(corpus.titles());
        log::debug!("Compiled {} title patterns", patterns.len());
        let mut map = SuggestionMap::new();

        for note in corpus.notes() {
            let found = self.suggest_with(note, &patterns);
            if !found.is_empty() {
                map.entry(note.title.clone()).or_default().extend(found);
            }
        }

        log::info!(
            "Found {} suggestions for {} notes",
            suggestion_count(&map),
            map.len()
        );
        map
    }

    /// Suggestions for one note: mentions of every other title in title
    /// order, then the category index if it is not already linked.
    pub fn suggest_for(&self, note: &Note, titles: &[&str]) -> Vec<Suggestion> {
        let patterns = self.finder.compile(titles.iter().copied());
        self.suggest_with(note, &patterns)
    }

    fn suggest_with(&self, note: &Note, patterns: &[TitlePattern]) -> Vec<Suggestion> {
        let others = patterns.iter().filter(|p| p.title() != note.title);

        let mut suggestions: Vec<Suggestion> = self
            .finder
            .find_with(&note.content, others)
            .into_iter()
            .map(|m| Suggestion::mention(m.title, m.offset))
            .collect();

        if let Some(index) = self.index.index_for(&note.category)
            && !note.links_to(index)
        {
            suggestions.push(Suggestion::index(index));
        }

        suggestions
    }
}

/// Total number of suggestions in a map
pub fn suggestion_count(map: &SuggestionMap) -> usize {
    map.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(min_len: usize, index_titles: &[&str]) -> SuggestionEngine {
        let config = AnalysisConfig {
            min_mention_len: min_len,
            ..AnalysisConfig::default()
        };
        let index = CategoryIndex::from_titles(index_titles.iter().copied(), &config);
        SuggestionEngine::new(&config, index)
    }

    fn note(title: &str, category: &str, content: &str) -> Note {
        Note::new(title, format!("{}/{}.md", category, title), category, content)
            .with_links(vaultweave_parser::extract_links(content))
    }

    #[test]
    fn test_short_title_mention() {
        let engine = engine(1, &[]);
        let a = note("A", "thoughts", "see B for details");
        let found = engine.suggest_for(&a, &["A", "B"]);

        assert_eq!(found, vec![Suggestion::mention("B", 4)]);
        assert_eq!(found[0].reason, "'B' mentioned but not linked");
    }

    #[test]
    fn test_default_floor_skips_short_titles() {
        let engine = engine(3, &[]);
        let a = note("A", "thoughts", "see B for details");
        assert!(engine.suggest_for(&a, &["A", "B"]).is_empty());
    }

    #[test]
    fn test_own_title_not_suggested() {
        let engine = engine(3, &[]);
        let n = note("Garden", "projects", "The Garden grows");
        assert!(engine.suggest_for(&n, &["Garden"]).is_empty());
    }

    #[test]
    fn test_linked_title_not_suggested() {
        let engine = engine(3, &[]);
        let n = note("Notes", "thoughts", "[[Rust]] and Rust again");
        assert!(engine.suggest_for(&n, &["Notes", "Rust"]).is_empty());
    }

    #[test]
    fn test_index_suggestion() {
        let engine = engine(3, &["Projects MOC"]);
        let n = note("Garden", "projects", "Nothing to see");
        let found = engine.suggest_for(&n, &["Garden", "Projects MOC"]);

        assert_eq!(found, vec![Suggestion::index("Projects MOC")]);
        assert_eq!(found[0].reason, "Should link to [[Projects MOC]] MOC");
    }

    #[test]
    fn test_index_already_linked() {
        let engine = engine(3, &["Projects MOC"]);
        let n = note("Garden", "projects", "Back to [[Projects MOC]]");
        assert!(engine.suggest_for(&n, &["Garden", "Projects MOC"]).is_empty());
    }

    #[test]
    fn test_root_notes_get_no_index() {
        let mut config = AnalysisConfig::default();
        config.category_rules.push(CategoryRule::new("home", "root"));
        let index = CategoryIndex::from_titles(["Home MOC"], &config);
        let engine = SuggestionEngine::new(&config, index);

        let n = note("Inbox", "root", "");
        assert!(engine.suggest_for(&n, &["Inbox"]).is_empty());
    }

    #[test]
    fn test_mentions_precede_index() {
        let engine = engine(3, &["Ideas MOC"]);
        let n = note("Daily", "thoughts", "Rust, then more rust");
        let found = engine.suggest_for(&n, &["Daily", "Rust"]);

        let kinds: Vec<SuggestionKind> = found.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::Mention,
                SuggestionKind::Mention,
                SuggestionKind::Index
            ]
        );
        assert_eq!(found[1].position, Some(16));
    }

    #[test]
    fn test_suggest_over_corpus() {
        let engine = engine(3, &[]);
        let corpus = Corpus::from_notes(
            "/vault",
            vec![
                note("Garden", "projects", "Compost notes live elsewhere"),
                note("Compost", "projects", "[[Garden]]"),
            ],
        );

        let map = engine.suggest(&corpus);
        assert_eq!(map.len(), 1);
        assert_eq!(map["Garden"], vec![Suggestion::mention("Compost", 0)]);
        assert_eq!(suggestion_count(&map), 1);
    }
}
