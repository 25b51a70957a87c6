//! Integration tests for listing order

use super::test_utils::{build_index, media_fixture};
use mediatree::listing::{list_children, Listing};
use mediatree::tree::{TreeIndex, WalkEntry};

fn names(index: &TreeIndex, path: &str) -> Vec<String> {
    let node = index.resolve(path).unwrap();
    list_children(&node)
        .iter()
        .map(|n| n.name().to_string())
        .collect()
}

/// Mixed-case names sort case-insensitively
#[test]
fn test_case_insensitive_order() {
    let index = TreeIndex::default();
    index
        .build(vec![
            WalkEntry::dir("Banana"),
            WalkEntry::file("apple"),
            WalkEntry::file("Cherry"),
        ])
        .unwrap();

    assert_eq!(names(&index, ""), vec!["apple", "Banana", "Cherry"]);
}

/// Directories and files are interleaved by name, not grouped
#[test]
fn test_dirs_and_files_interleave() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    assert_eq!(names(&index, ""), vec!["films", "music", "readme.txt"]);
    assert_eq!(names(&index, "films"), vec!["Extras", "intro.mp4"]);
}

/// A resolved file lists nothing
#[test]
fn test_file_listing_empty() {
    let temp_dir = media_fixture();
    let index = build_index(temp_dir.path());

    let listing = Listing::for_node(index.resolve("readme.txt/extra/segments").unwrap());
    assert!(listing.entries.is_empty());
    assert_eq!(listing.path, "readme.txt");
    assert_eq!(listing.breadcrumbs.len(), 1);
    assert_eq!(listing.node.content_type(), Some("text/plain; charset=utf-8"));
}
