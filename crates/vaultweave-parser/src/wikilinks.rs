//! Wikilink extractor: `[[Note]]`, `[[folder/Note]]`, `[[Note|Display Text]]`

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Matches `[[target]]` and `[[target|alias]]`, capturing the target
static WIKILINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]").unwrap());

/// Extract the set of wikilink targets from content.
///
/// Targets are returned exactly as written: the alias is dropped, but case
/// and any folder prefix are preserved. Unterminated or empty markers never
/// match.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    if !content.contains("[[") {
        return BTreeSet::new();
    }

    WIKILINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_and_aliased() {
        let links = extract_links("See [[A]] and [[B|C]].");
        let expected: BTreeSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_folder_target_kept_verbatim() {
        let links = extract_links("See [[capabilities/File Management|File Management]]");
        assert!(links.contains("capabilities/File Management"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let links = extract_links("[[Note]] then [[Note]] and [[Note|again]]");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_case_preserved() {
        let links = extract_links("[[rust]] [[Rust]]");
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_malformed_markers_ignored() {
        assert!(extract_links("[[unterminated").is_empty());
        assert!(extract_links("[[]]").is_empty());
        assert!(extract_links("[single]").is_empty());
        assert!(extract_links("[[|alias only]]").is_empty());
    }

    #[test]
    fn test_multiline_content() {
        let links = extract_links("Line 1\nLine 2 [[Link1]] here\n[[Link2]]");
        assert!(links.contains("Link1"));
        assert!(links.contains("Link2"));
    }
}
