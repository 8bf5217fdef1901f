//! Link insertion into a note's "Related" section.
//!
//! Writes go straight to the target file (full overwrite, no temp file or
//! rollback). Vault runs are single-user batch jobs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;
use vaultweave_core::{Error, Result};

/// Whether an apply call may touch the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Report the change without writing
    Preview,
    /// Overwrite the file with the new content
    Commit,
}

impl ApplyMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::Preview } else { Self::Commit }
    }

    pub fn is_preview(self) -> bool {
        self == Self::Preview
    }
}

/// Result of a single apply call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub path: PathBuf,
    pub target: String,
    pub mode: ApplyMode,
    /// False when the link was already present
    pub applied: bool,
}

/// Inserts `[[target]]` list items under a configurable heading
pub struct LinkApplier {
    heading: String,
    heading_pattern: Regex,
}

impl LinkApplier {
    /// Create an applier for the given heading line (e.g. `## Related`)
    pub fn new(heading: &str) -> Result<Self> {
        let heading_pattern = Regex::new(&format!(r"(?m)^{}\s*$", regex::escape(heading)))
            .map_err(|e| Error::config_error(format!("Invalid related heading: {}", e)))?;

        Ok(Self {
            heading: heading.to_string(),
            heading_pattern,
        })
    }

    /// Compute the new content, or `None` if `[[target]]` is already present.
    ///
    /// With an existing heading the item goes right after it; otherwise a new
    /// section is appended after trimming trailing whitespace.
    pub fn insert_link(&self, content: &str, target: &str) -> Option<String> {
        let marker = format!("[[{}]]", target);
        if content.contains(&marker) {
            return None;
        }

        let updated = match self.heading_pattern.find(content) {
            Some(heading) => {
                let at = heading.end();
                format!("{}\n- {}{}", &content[..at], marker, &content[at..])
            }
            None => format!(
                "{}\n\n{}\n\n- {}\n",
                content.trim_end(),
                self.heading,
                marker
            ),
        };

        Some(updated)
    }

    /// Add `[[target]]` to the note at `path`
    #[instrument(skip(self), fields(file = %path.display()), name = "apply_link")]
    pub fn apply(&self, path: &Path, target: &str, mode: ApplyMode) -> Result<ApplyOutcome> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::io(e),
        })?;

        let updated = self.insert_link(&content, target);
        let applied = updated.is_some();

        match (updated, mode) {
            (Some(_), ApplyMode::Preview) => {
                log::info!("[DRY RUN] Would add [[{}]] to {}", target, display_name(path));
            }
            (Some(new_content), ApplyMode::Commit) => {
                std::fs::write(path, new_content).map_err(Error::io)?;
                log::info!("Added [[{}]] to {}", target, display_name(path));
            }
            (None, _) => {
                log::debug!("[[{}]] already present in {}", target, display_name(path));
            }
        }

        Ok(ApplyOutcome {
            path: path.to_path_buf(),
            target: target.to_string(),
            mode,
            applied,
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
