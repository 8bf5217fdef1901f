//! Shared utilities for resolving wikilink targets to note titles.

/// Resolve a raw wikilink target to the note title used by the link graph.
///
/// Only the segment after the final `/` is kept, so `[[folder/Note]]` and
/// `[[Note]]` point at the same note. The raw form stays available on the
/// note itself for existing-link checks.
///
/// # Examples
///
/// ```
/// use vaultweave_parser::link_utils::link_title;
///
/// assert_eq!(link_title("Note"), "Note");
/// assert_eq!(link_title("folder/Note"), "Note");
/// assert_eq!(link_title("a/b/c/Deep Note"), "Deep Note");
/// ```
pub fn link_title(target: &str) -> &str {
    target.rsplit('/').next().unwrap_or(target)
}
