//! Vault scanning: builds a fresh [`Corpus`] from the files on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::instrument;
use vaultweave_core::prelude::*;
use vaultweave_parser::extract_links;
use walkdir::{DirEntry, WalkDir};

/// Every note file found in one scan of the vault, in sorted path order.
///
/// When two files share a stem, both stay in [`Corpus::notes`] so their
/// links are counted, but [`Corpus::find`] and [`Corpus::titles`] only see
/// the first one.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    notes: Vec<Note>,
}

impl Corpus {
    /// Scan the vault described by `config`.
    ///
    /// Fails only when the root is missing or not a directory; unreadable
    /// entries are logged and skipped.
    #[instrument(skip(config), fields(root = %config.root.display()), name = "corpus_load")]
    pub fn load(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        log::info!("Scanning vault: {}", config.root.display());

        let mut paths = scan_files(config);
        paths.sort();
        log::info!("Found {} note files", paths.len());

        let mut notes = Vec::with_capacity(paths.len());
        let mut seen = HashSet::new();

        for relative in paths {
            let absolute = config.root.join(&relative);
            let bytes = match std::fs::read(&absolute) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Failed to read {}: {}", absolute.display(), e);
                    continue;
                }
            };

            let note = build_note(&relative, &bytes, config);
            if !seen.insert(note.title.clone()) {
                log::warn!(
                    "Duplicate title '{}' at {}; keeping the first file for its metadata",
                    note.title,
                    relative.display()
                );
            }
            log::debug!(
                "Parsed {}: {} links extracted",
                relative.display(),
                note.links.len()
            );
            notes.push(note);
        }

        Ok(Self {
            root: config.root.clone(),
            notes,
        })
    }

    /// Build a corpus from already-parsed notes (sorted by the caller)
    pub fn from_notes(root: impl Into<PathBuf>, notes: Vec<Note>) -> Self {
        Self {
            root: root.into(),
            notes,
        }
    }

    /// Vault root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All scanned notes, duplicates included
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Distinct titles in scan order
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.notes
            .iter()
            .map(|note| note.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// First note carrying `title`
    pub fn find(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.title == title)
    }

    /// Absolute path of a note on disk
    pub fn absolute_path(&self, note: &Note) -> PathBuf {
        self.root.join(&note.path)
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Category of a note: its top-level directory, or the root category
pub fn category_of(relative: &Path, root_category: &str) -> String {
    let mut components = relative.components();
    match (components.next(), components.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
        _ => root_category.to_string(),
    }
}

fn build_note(relative: &Path, bytes: &[u8], config: &AnalysisConfig) -> Note {
    let title = relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = decode_permissive(bytes);
    let links = extract_links(&content);

    let mut note = Note::new(
        title,
        relative,
        category_of(relative, &config.root_category),
        content,
    );
    note.size = bytes.len() as u64;
    note.links = links;
    note
}

/// Relative paths of all note files, skipping hidden components
fn scan_files(config: &AnalysisConfig) -> Vec<PathBuf> {
    let root = &config.root;

    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry, &config.hidden_prefix))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        // Symlinked files count as notes; symlinked directories are not walked
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.to_string_lossy() == config.extension)
        })
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

fn is_hidden(entry: &DirEntry, prefix: &str) -> bool {
    entry.file_name().to_string_lossy().starts_with(prefix)
}
