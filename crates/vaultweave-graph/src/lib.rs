//! # Link Graph Analysis
//!
//! Link graph of vault notes built on petgraph, plus connectivity statistics.
//!
//! Provides:
//! - Directed title graph with path-prefixed targets resolved (`folder/Note` → `Note`)
//! - Forward links and backlinks per title, dangling targets included
//! - Orphan detection (index and root categories exempt)
//! - Per-category note counts and average link totals
//! - Most-connected ranking (stable on ties)
//!
//! ## Quick Start
//!
//! ```
//! use vaultweave_core::{AnalysisConfig, Note};
//! use vaultweave_graph::GraphAnalyzer;
//!
//! let notes = vec![
//!     Note::new("A", "thoughts/A.md", "thoughts", "[[B]]").with_links(["B"]),
//!     Note::new("B", "thoughts/B.md", "thoughts", "[[A]]").with_links(["A"]),
//!     Note::new("C", "thoughts/C.md", "thoughts", ""),
//! ];
//!
//! let config = AnalysisConfig::default();
//! let stats = GraphAnalyzer::new(&config).analyze(&notes);
//! assert_eq!(stats.total_links, 2);
//! assert_eq!(stats.orphans, vec!["C"]);
//! ```
//!
//! ## Modules
//!
//! - [`graph`] - [`LinkGraph`]
//! - [`analysis`] - [`GraphAnalyzer`] and [`VaultStats`]

pub mod analysis;
pub mod graph;

pub use analysis::{CategoryStats, GraphAnalyzer, NoteStats, VaultStats};
pub use graph::LinkGraph;

pub mod prelude {
    pub use crate::analysis::{CategoryStats, GraphAnalyzer, NoteStats, VaultStats};
    pub use crate::graph::LinkGraph;
    pub use vaultweave_core::prelude::*;
}
