//! Link graph using petgraph for vault relationship analysis

use petgraph::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use vaultweave_core::Note;
use vaultweave_parser::link_title;

/// Directed graph of note titles.
///
/// Nodes are titles, including dangling link targets that have no note.
/// Each source/target pair holds at most one edge, so degrees equal the
/// sizes of the forward and reverse link sets.
pub struct LinkGraph {
    graph: DiGraph<String, ()>,
    title_index: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    /// Create an empty link graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            title_index: HashMap::new(),
        }
    }

    /// Build the graph from scanned notes.
    ///
    /// Notes sharing a title contribute their links to the same node.
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut graph = Self::new();

        for note in notes {
            graph.add_title(&note.title);
        }

        for note in notes {
            for target in &note.links {
                graph.add_reference(&note.title, target);
            }
        }

        log::debug!(
            "Link graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }

    /// Get or create the node for a title
    pub fn add_title(&mut self, title: &str) -> NodeIndex {
        if let Some(&idx) = self.title_index.get(title) {
            return idx;
        }
        let idx = self.graph.add_node(title.to_string());
        self.title_index.insert(title.to_string(), idx);
        idx
    }

    /// Record a link from `source` to a raw wikilink target.
    ///
    /// The target is resolved to its final path segment first.
    pub fn add_reference(&mut self, source: &str, raw_target: &str) {
        let source_idx = self.add_title(source);
        let target_idx = self.add_title(link_title(raw_target));
        self.graph.update_edge(source_idx, target_idx, ());
    }

    /// Number of distinct titles linking to `title`
    pub fn incoming(&self, title: &str) -> usize {
        self.degree(title, Incoming)
    }

    /// Number of distinct titles `title` links to
    pub fn outgoing(&self, title: &str) -> usize {
        self.degree(title, Outgoing)
    }

    fn degree(&self, title: &str, direction: Direction) -> usize {
        self.title_index
            .get(title)
            .map(|&idx| self.graph.edges_directed(idx, direction).count())
            .unwrap_or(0)
    }

    /// Forward links: source title to the set of targets it links to.
    /// Titles without outgoing links are absent.
    pub fn links_from(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.adjacency(|edge| (edge.source(), edge.target()))
    }

    /// Backlinks: target title to the set of sources linking to it.
    /// Dangling targets appear here even though no note carries them.
    pub fn links_to(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.adjacency(|edge| (edge.target(), edge.source()))
    }

    fn adjacency<F>(&self, key_value: F) -> BTreeMap<String, BTreeSet<String>>
    where
        F: Fn(petgraph::graph::EdgeReference<'_, ()>) -> (NodeIndex, NodeIndex),
    {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for edge in self.graph.edge_references() {
            let (key, value) = key_value(edge);
            map.entry(self.graph[key].clone())
                .or_default()
                .insert(self.graph[value].clone());
        }
        map
    }

    /// Whether a title exists as a node (note or dangling target)
    pub fn contains(&self, title: &str) -> bool {
        self.title_index.contains_key(title)
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count (distinct source/target pairs)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for LinkGraph {
    fn default() -> Self {
        Self::new()
    }
}
