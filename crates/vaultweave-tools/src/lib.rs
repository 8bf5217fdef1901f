//! # vaultweave Tools
//!
//! Link suggestion and application on top of a scanned [`Corpus`].
//!
//! - [`index_map`] - maps categories to their index notes (MOCs) by keyword
//! - [`suggestions`] - unlinked mentions plus missing index links per note
//! - [`link_tools`] - writes suggestions back under the "Related" heading
//!
//! ## Example
//!
//! ```no_run
//! use vaultweave_core::AnalysisConfig;
//! use vaultweave_tools::{LinkTools, SuggestionEngine};
//! use vaultweave_vault::{ApplyMode, Corpus};
//!
//! # fn example() -> vaultweave_core::Result<()> {
//! let config = AnalysisConfig::new("/path/to/vault");
//! let corpus = Corpus::load(&config)?;
//! let suggestions = SuggestionEngine::from_config(&config)?.suggest(&corpus);
//!
//! let report = LinkTools::new(&corpus, &config)?.apply_all(&suggestions, ApplyMode::Preview);
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! [`Corpus`]: vaultweave_vault::Corpus

pub mod index_map;
pub mod link_tools;
pub mod suggestions;

pub use index_map::CategoryIndex;
pub use link_tools::{ApplyReport, LinkTools};
pub use suggestions::{SuggestionEngine, SuggestionMap, suggestion_count};

pub mod prelude {
    pub use crate::index_map::CategoryIndex;
    pub use crate::link_tools::{ApplyReport, LinkTools};
    pub use crate::suggestions::{SuggestionEngine, SuggestionMap};
    pub use vaultweave_vault::prelude::*;
}
