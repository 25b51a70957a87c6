//! Integration tests for index build determinism

use super::test_utils::{build_index, media_fixture, FIXTURE_PATHS};
use mediatree::tree::{TreeIndex, Walker};

/// Building twice from the same filesystem yields identical resolutions
#[test]
fn test_same_filesystem_same_index() {
    let temp_dir = media_fixture();
    let first = build_index(temp_dir.path());
    let second = build_index(temp_dir.path());

    for path in FIXTURE_PATHS {
        let a = first.resolve(path).unwrap();
        let b = second.resolve(path).unwrap();
        assert_eq!(a.path(), b.path());
        assert_eq!(a.name(), b.name());
        assert_eq!(a.is_dir(), b.is_dir());
        assert_eq!(a.content_type(), b.content_type());
        assert_eq!(a.child_count(), b.child_count());
    }
    assert_eq!(first.len(), second.len());
}

/// The walk itself is stable across runs
#[test]
fn test_walk_order_is_stable() {
    let temp_dir = media_fixture();
    let walker = Walker::new(temp_dir.path().to_path_buf());

    let first = walker.walk().unwrap();
    let second = walker.walk().unwrap();
    assert_eq!(first, second);

    let paths: Vec<_> = first.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, FIXTURE_PATHS);
}

/// Building from the same entry sequence on two fresh indexes is idempotent
#[test]
fn test_build_from_same_entries() {
    let temp_dir = media_fixture();
    let entries = Walker::new(temp_dir.path().to_path_buf()).walk().unwrap();

    let first = TreeIndex::default();
    let second = TreeIndex::default();
    let stats_a = first.build(entries.clone()).unwrap();
    let stats_b = second.build(entries.clone()).unwrap();

    assert_eq!(stats_a.entries(), stats_b.entries());
    for entry in &entries {
        assert_eq!(
            first.resolve(&entry.path).unwrap().path(),
            second.resolve(&entry.path).unwrap().path()
        );
    }
}
