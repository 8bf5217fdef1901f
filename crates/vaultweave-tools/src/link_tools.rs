//! Batch application of suggestions to note files.

use crate::suggestions::SuggestionMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vaultweave_core::prelude::*;
use vaultweave_vault::{ApplyMode, ApplyOutcome, Corpus, LinkApplier};

/// Summary of a batch apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyReport {
    pub mode: ApplyMode,
    /// Links added (or that would be added in preview)
    pub applied: usize,
    pub outcomes: Vec<ApplyOutcome>,
    /// Per-file failures, as `title: reason`
    pub errors: Vec<String>,
}

impl ApplyReport {
    /// `[DRY RUN] Would apply N links` or `Applied N links`
    pub fn summary(&self) -> String {
        if self.mode.is_preview() {
            format!("[DRY RUN] Would apply {} links", self.applied)
        } else {
            format!("Applied {} links", self.applied)
        }
    }
}

/// Applies a [`SuggestionMap`] to the files of a corpus
pub struct LinkTools<'a> {
    corpus: &'a Corpus,
    applier: LinkApplier,
}

impl<'a> LinkTools<'a> {
    pub fn new(corpus: &'a Corpus, config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            corpus,
            applier: LinkApplier::new(&config.related_heading)?,
        })
    }

    /// Add every suggested target to its note.
    ///
    /// Targets repeat across mentions, so each is applied once per note.
    /// A note that cannot be read or written is logged and skipped.
    pub fn apply_all(&self, suggestions: &SuggestionMap, mode: ApplyMode) -> ApplyReport {
        let mut report = ApplyReport {
            mode,
            applied: 0,
            outcomes: Vec::new(),
            errors: Vec::new(),
        };

        for (title, items) in suggestions {
            let Some(note) = self.corpus.find(title) else {
                log::warn!("No file for note '{}', skipping", title);
                report.errors.push(format!("{}: note not found", title));
                continue;
            };
            let path = self.corpus.absolute_path(note);

            let mut seen = HashSet::new();
            for suggestion in items.iter().filter(|s| seen.insert(s.target.as_str())) {
                match self.applier.apply(&path, &suggestion.target, mode) {
                    Ok(outcome) => {
                        if outcome.applied {
                            report.applied += 1;
                        }
                        report.outcomes.push(outcome);
                    }
                    Err(e) => {
                        log::warn!("Failed to link [[{}]] from '{}': {}", suggestion.target, title, e);
                        report.errors.push(format!("{}: {}", title, e));
                        break;
                    }
                }
            }
        }

        log::info!("{}", report.summary());
        report
    }
}
