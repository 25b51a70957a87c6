//! Property-based tests for resolve and listing

use mediatree::error::ResolveError;
use mediatree::listing::list_children;
use mediatree::tree::{TreeIndex, WalkEntry};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Path segments: short names, mixed case, no slashes
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ._-]{0,7}"
}

/// A set of relative paths closed under ancestors, in pre-order
fn entry_set() -> impl Strategy<Value = Vec<WalkEntry>> {
    prop::collection::vec(prop::collection::vec(segment(), 1..4), 1..24).prop_map(|paths| {
        let mut dirs = BTreeSet::new();
        let mut files = BTreeSet::new();
        for segments in paths {
            for depth in 1..segments.len() {
                dirs.insert(segments[..depth].join("/"));
            }
            files.insert(segments.join("/"));
        }
        // A path used as a directory cannot also be a file
        files.retain(|f| !dirs.contains(f));

        let mut all: Vec<WalkEntry> = dirs
            .into_iter()
            .map(WalkEntry::dir)
            .chain(files.into_iter().map(WalkEntry::file))
            .collect();
        // Parents sort before their descendants when comparing segment lists
        all.sort_by(|a, b| {
            a.path
                .split('/')
                .collect::<Vec<_>>()
                .cmp(&b.path.split('/').collect::<Vec<_>>())
        });
        all
    })
}

fn built(entries: &[WalkEntry]) -> TreeIndex {
    let index = TreeIndex::default();
    index.build(entries.to_vec()).unwrap();
    index
}

proptest! {
    /// Every inserted path resolves to a node carrying that path
    #[test]
    fn roundtrip_lookup(entries in entry_set()) {
        let index = built(&entries);
        for entry in &entries {
            let node = index.resolve(&entry.path).unwrap();
            prop_assert_eq!(node.path(), entry.path.as_str());
            prop_assert_eq!(node.is_dir(), entry.is_dir);
        }
    }

    /// The empty path is always the root directory
    #[test]
    fn root_resolves_to_root(entries in entry_set()) {
        let index = built(&entries);
        let root = index.resolve("").unwrap();
        prop_assert!(root.is_dir());
        prop_assert_eq!(root.path(), ".");
    }

    /// Segments after a file never change the result
    #[test]
    fn file_truncates_descent(
        entries in entry_set(),
        tail in prop::collection::vec("[a-z/.]{0,6}", 1..4),
    ) {
        let index = built(&entries);
        for entry in entries.iter().filter(|e| !e.is_dir) {
            let padded = format!("{}/{}", entry.path, tail.join("/"));
            let node = index.resolve(&padded).unwrap();
            prop_assert_eq!(node.path(), entry.path.as_str());
        }
    }

    /// Any input whose first segment is unknown is not-found, never a panic
    #[test]
    fn unknown_first_segment_not_found(entries in entry_set(), rest in ".{0,16}") {
        let index = built(&entries);
        let first = "\u{1F5C2}absent";
        let input = format!("{}/{}", first, rest);
        let result = index.resolve(&input);
        let is_not_found = matches!(result, Err(ResolveError::NotFound { .. }));
        prop_assert!(is_not_found);
    }

    /// Arbitrary input strings never panic
    #[test]
    fn resolve_is_total(entries in entry_set(), input in ".{0,32}") {
        let index = built(&entries);
        let _ = index.resolve(&input);
    }

    /// Listings are ordered by lowercased name
    #[test]
    fn listing_is_case_insensitive_sorted(entries in entry_set()) {
        let index = built(&entries);
        for entry in entries.iter().filter(|e| e.is_dir) {
            let node = index.resolve(&entry.path).unwrap();
            let names: Vec<String> = list_children(&node)
                .iter()
                .map(|n| n.name().to_lowercase())
                .collect();
            let mut sorted = names.clone();
            sorted.sort();
            prop_assert_eq!(names, sorted);
        }
    }

    /// Two fresh builds from the same entries agree on every path
    #[test]
    fn build_is_idempotent(entries in entry_set()) {
        let a = built(&entries);
        let b = built(&entries);
        for entry in &entries {
            let left = a.resolve(&entry.path).unwrap();
            let right = b.resolve(&entry.path).unwrap();
            prop_assert_eq!(left.path(), right.path());
            prop_assert_eq!(left.child_count(), right.child_count());
        }
    }
}
