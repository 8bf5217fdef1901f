//! # Vault Access
//!
//! Reading a vault into memory and writing links back into notes.
//!
//! - [`corpus::Corpus`] - one full scan of the vault: every note file (by
//!   extension, hidden components skipped), decoded permissively, with its
//!   wikilinks extracted. Rebuilt on every run; nothing is cached.
//! - [`apply::LinkApplier`] - inserts `[[target]]` under the "Related"
//!   heading, creating the section if needed, with preview and commit modes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vaultweave_core::AnalysisConfig;
//! use vaultweave_vault::{ApplyMode, Corpus, LinkApplier};
//!
//! # fn example() -> vaultweave_core::Result<()> {
//! let config = AnalysisConfig::new("/path/to/vault");
//! let corpus = Corpus::load(&config)?;
//! println!("{} notes", corpus.len());
//!
//! let applier = LinkApplier::new(&config.related_heading)?;
//! if let Some(note) = corpus.find("Garden") {
//!     applier.apply(&corpus.absolute_path(note), "Projects MOC", ApplyMode::Preview)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod corpus;

pub use apply::{ApplyMode, ApplyOutcome, LinkApplier};
pub use corpus::{Corpus, category_of, decode_permissive};

pub mod prelude {
    pub use crate::apply::{ApplyMode, ApplyOutcome, LinkApplier};
    pub use crate::corpus::Corpus;
    pub use vaultweave_core::prelude::*;
}
