//! Vault connectivity statistics.
//!
//! Computes per-note degrees, orphans, per-category averages and the
//! most-connected ranking from a single snapshot of scanned notes. Output
//! is a pure function of the input: the same files give the same report.

use crate::graph::LinkGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;
use vaultweave_core::{AnalysisConfig, Note};

/// Connectivity of a single note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteStats {
    pub title: String,
    pub path: PathBuf,
    pub category: String,
    pub size: u64,
    pub incoming: usize,
    pub outgoing: usize,
    pub total_links: usize,
}

/// Aggregate connectivity of one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Number of notes in the category
    pub count: usize,
    /// Sum of `total_links` over those notes
    pub links: usize,
    /// Mean `total_links`
    pub avg_links: f64,
}

/// Full analysis of one vault snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultStats {
    pub total_notes: usize,
    pub total_links: usize,
    pub orphans: Vec<String>,
    pub orphan_count: usize,
    pub category_stats: BTreeMap<String, CategoryStats>,
    pub most_connected: Vec<(String, usize)>,
    pub notes: Vec<NoteStats>,
    pub links_from: BTreeMap<String, BTreeSet<String>>,
    pub links_to: BTreeMap<String, BTreeSet<String>>,
}

impl VaultStats {
    /// Stats for a note by title
    pub fn note(&self, title: &str) -> Option<&NoteStats> {
        self.notes.iter().find(|n| n.title == title)
    }

    /// True when no note qualifies as an orphan
    pub fn is_well_connected(&self) -> bool {
        self.orphan_count == 0
    }

    /// Category with the lowest average link count (first in name order on ties)
    pub fn weakest_category(&self) -> Option<(&str, &CategoryStats)> {
        self.category_stats
            .iter()
            .min_by(|a, b| a.1.avg_links.total_cmp(&b.1.avg_links))
            .map(|(name, stats)| (name.as_str(), stats))
    }
}

/// Computes [`VaultStats`] for a set of notes
pub struct GraphAnalyzer<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> GraphAnalyzer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run the analysis.
    ///
    /// Notes are taken in the given order; when titles repeat, only the
    /// first note is reported, while every note's links feed the graph.
    pub fn analyze(&self, notes: &[Note]) -> VaultStats {
        let graph = LinkGraph::from_notes(notes);

        let mut seen = HashSet::new();
        let note_stats: Vec<NoteStats> = notes
            .iter()
            .filter(|note| seen.insert(note.title.as_str()))
            .map(|note| {
                let incoming = graph.incoming(&note.title);
                let outgoing = graph.outgoing(&note.title);
                NoteStats {
                    title: note.title.clone(),
                    path: note.path.clone(),
                    category: note.category.clone(),
                    size: note.size,
                    incoming,
                    outgoing,
                    total_links: incoming + outgoing,
                }
            })
            .collect();

        let orphans: Vec<String> = note_stats
            .iter()
            .filter(|n| self.is_orphan(n))
            .map(|n| n.title.clone())
            .collect();

        let stats = VaultStats {
            total_notes: note_stats.len(),
            total_links: graph.edge_count(),
            orphan_count: orphans.len(),
            orphans,
            category_stats: category_stats(&note_stats),
            most_connected: most_connected(&note_stats, self.config.top_n),
            links_from: graph.links_from(),
            links_to: graph.links_to(),
            notes: note_stats,
        };

        log::info!(
            "Analyzed {} notes, {} links, {} orphans",
            stats.total_notes,
            stats.total_links,
            stats.orphan_count
        );

        stats
    }

    /// No links in or out, outside the index and root categories
    pub fn is_orphan(&self, note: &NoteStats) -> bool {
        note.incoming == 0
            && note.outgoing == 0
            && !self.config.is_exempt_category(&note.category)
    }
}

fn category_stats(notes: &[NoteStats]) -> BTreeMap<String, CategoryStats> {
    let mut buckets: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for note in notes {
        let bucket = buckets.entry(note.category.clone()).or_default();
        bucket.count += 1;
        bucket.links += note.total_links;
    }
    // Buckets exist only for categories with at least one note.
    for bucket in buckets.values_mut() {
        bucket.avg_links = bucket.links as f64 / bucket.count as f64;
    }
    buckets
}

fn most_connected(notes: &[NoteStats], limit: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<&NoteStats> = notes.iter().collect();
    ranked.sort_by(|a, b| b.total_links.cmp(&a.total_links));
    ranked
        .into_iter()
        .take(limit)
        .map(|n| (n.title.clone(), n.total_links))
        .collect()
}
