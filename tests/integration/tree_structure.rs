//! Integration tests for tree structure correctness

use super::test_utils::{build_index, media_fixture, FIXTURE_PATHS};
use mediatree::error::{IndexError, ResolveError};
use mediatree::tree::{TreeIndex, WalkEntry};

/// Every walked entry resolves back to a node carrying its own path
#[test]
fn test_every_entry_resolves_to_itself() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    for path in FIXTURE_PATHS {
        let node = index.resolve(path).unwrap();
        assert_eq!(node.path(), *path);
    }
    assert_eq!(index.len(), FIXTURE_PATHS.len() + 1);
}

/// Root node exists and is a directory
#[test]
fn test_root_is_directory() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    let root = index.resolve("").unwrap();
    assert!(root.is_dir());
    assert_eq!(root.child_count(), 3);
}

/// Directory and file counts match the fixture
#[test]
fn test_stats_match_fixture() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    let stats = index.stats();
    assert_eq!(stats.directories, 4);
    assert_eq!(stats.files, 4);
    assert_eq!(stats.max_depth, 3);
}

/// Trailing segments after a file are ignored
#[test]
fn test_file_truncates_descent() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    let direct = index.resolve("films/intro.mp4").unwrap();
    let padded = index.resolve("films/intro.mp4/../nonsense/x").unwrap();
    assert_eq!(direct.path(), padded.path());
    assert!(!padded.is_dir());
}

/// A missing first segment is always not-found
#[test]
fn test_unknown_top_level_not_found() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    for path in ["nope", "nope/films", "a//b", "Films"] {
        let err = index.resolve(path).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }), "{path}");
    }
}

/// Duplicate entries leave a single node behind
#[test]
fn test_duplicate_entries_scenario() {
    let index = TreeIndex::default();
    index
        .build(vec![
            WalkEntry::dir("a"),
            WalkEntry::file("a/b.txt"),
            WalkEntry::file("a/b.txt"),
        ])
        .unwrap();

    let node = index.resolve("a/b.txt").unwrap();
    assert_eq!(node.name(), "b.txt");
    assert!(!node.is_dir());
    assert_eq!(index.resolve("a").unwrap().child_count(), 1);
}

/// Nested image gets a content type and shows up in its parent's listing
#[test]
fn test_nested_png_scenario() {
    let index = TreeIndex::default();
    index
        .build(vec![
            WalkEntry::dir("x"),
            WalkEntry::dir("x/y"),
            WalkEntry::file("x/y/z.png"),
        ])
        .unwrap();

    let z = index.resolve("x/y/z.png").unwrap();
    assert_eq!(z.content_type(), Some("image/png"));

    let y = index.resolve("x/y").unwrap();
    assert!(y.is_dir());
    let listing = mediatree::listing::list_children(&y);
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name(), "z.png");
}

/// Entries whose ancestors never arrived fail the build with the offending path
#[test]
fn test_missing_ancestor_reports_path() {
    let index = TreeIndex::default();
    let err = index
        .build(vec![WalkEntry::file("ghost/file.txt")])
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, IndexError::MissingAncestor { .. }));
    assert!(message.contains("ghost/file.txt"));
    assert!(index.is_empty());
}
