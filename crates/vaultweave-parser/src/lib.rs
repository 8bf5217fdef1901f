//! # vaultweave Parser
//!
//! Text scanning for vault notes:
//! - [`wikilinks`] - `[[target]]` / `[[target|alias]]` extraction
//! - [`link_utils`] - resolving raw targets (`folder/Note`) to graph titles
//! - [`mentions`] - unlinked, case-insensitive whole-word title mentions
//!
//! None of these functions fail: malformed markers simply do not match.
//!
//! ## Quick Start
//!
//! ```
//! use vaultweave_parser::{extract_links, link_title, MentionFinder};
//!
//! let content = "Started [[projects/Garden|the garden]]. Rust notes pending.";
//!
//! let links = extract_links(content);
//! assert!(links.contains("projects/Garden"));
//! assert_eq!(link_title("projects/Garden"), "Garden");
//!
//! let mentions = MentionFinder::default().find(content, ["Rust"]);
//! assert_eq!(mentions.len(), 1);
//! assert_eq!(mentions[0].title, "Rust");
//! ```

pub mod link_utils;
pub mod mentions;
pub mod wikilinks;

pub use link_utils::link_title;
pub use mentions::{Mention, MentionFinder, TitlePattern};
pub use wikilinks::extract_links;
