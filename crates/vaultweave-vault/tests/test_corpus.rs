//! Integration tests for vault scanning

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vaultweave_core::{AnalysisConfig, Error};
use vaultweave_vault::Corpus;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup_vault() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    write(root, "Home.md", b"# Home\n[[Rust]] [[projects/Garden|garden]]");
    write(root, "learnings/Rust.md", b"# Rust\nSee [[Home]].");
    write(root, "projects/Garden.md", b"# Garden\n");
    write(root, "projects/2024/Deck.md", b"# Deck\n");
    write(root, "MOC/Projects MOC.md", b"[[Garden]]");
    write(root, "notes.txt", b"not a note");
    write(root, ".obsidian/workspace.md", b"[[Rust]]");
    write(root, "learnings/.drafts/Draft.md", b"[[Rust]]");
    write(root, "learnings/.hidden.md", b"[[Rust]]");

    temp
}

#[test]
fn test_scan_collects_notes_in_sorted_path_order() {
    let temp = setup_vault();
    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();

    let paths: Vec<PathBuf> = corpus.notes().iter().map(|n| n.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("Home.md"),
            PathBuf::from("MOC/Projects MOC.md"),
            PathBuf::from("learnings/Rust.md"),
            PathBuf::from("projects/2024/Deck.md"),
            PathBuf::from("projects/Garden.md"),
        ]
    );
}

#[test]
fn test_hidden_components_and_other_extensions_skipped() {
    let temp = setup_vault();
    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();

    assert!(corpus.find("workspace").is_none());
    assert!(corpus.find("Draft").is_none());
    assert!(corpus.find(".hidden").is_none());
    assert!(corpus.find("notes").is_none());
}

#[test]
fn test_categories_and_links() {
    let temp = setup_vault();
    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();

    let home = corpus.find("Home").unwrap();
    assert_eq!(home.category, "root");
    assert!(home.links_to("Rust"));
    assert!(home.links_to("projects/Garden"));

    assert_eq!(corpus.find("Deck").unwrap().category, "projects");
    assert_eq!(corpus.find("Projects MOC").unwrap().category, "MOC");
}

#[test]
fn test_size_is_file_bytes() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Broken.md", b"ok \xff\xfe [[Link]]");

    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();
    let note = corpus.find("Broken").unwrap();
    assert_eq!(note.size, 14);
    assert_eq!(note.content, "ok  [[Link]]");
    assert!(note.links_to("Link"));
}

#[test]
fn test_duplicate_titles_first_path_wins() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "b/Same.md", b"[[Two]]");
    write(temp.path(), "a/Same.md", b"[[One]]");

    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.titles(), vec!["Same"]);
    assert_eq!(corpus.find("Same").unwrap().category, "a");
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let err = Corpus::load(&AnalysisConfig::new(temp.path().join("nope"))).unwrap_err();
    assert!(matches!(err, Error::VaultNotFound { .. }));
}

#[test]
fn test_empty_vault() {
    let temp = TempDir::new().unwrap();
    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();
    assert!(corpus.is_empty());
    assert!(corpus.titles().is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_notes_are_scanned() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write(outside.path(), "A.md", b"see [[B]]");
    write(temp.path(), "thoughts/B.md", b"");
    std::os::unix::fs::symlink(outside.path().join("A.md"), temp.path().join("thoughts/A.md")).unwrap();

    let corpus = Corpus::load(&AnalysisConfig::new(temp.path())).unwrap();
    assert_eq!(corpus.titles(), vec!["A", "B"]);

    let a = corpus.find("A").unwrap();
    assert_eq!(a.category, "thoughts");
    assert!(a.links_to("B"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    write(temp.path(), "Open.md", b"[[Locked]]");
    write(temp.path(), "Locked.md", b"secret");
    let locked = temp.path().join("Locked.md");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root
    if fs::read(&locked).is_ok() {
        return;
    }

    let corpus = Corpus::load(&AnalysisConfig::new(temp.path()));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    let corpus = corpus.unwrap();
    assert_eq!(corpus.titles(), vec!["Open"]);
    assert!(corpus.find("Open").unwrap().links_to("Locked"));
}
