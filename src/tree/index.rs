//! In-memory tree index over the media root
//!
//! The index owns a single root [`Node`] guarded by one exclusive lock. Build
//! runs once and holds the lock for the whole pass; every resolve acquires it
//! on its own.
//! All lookups are serialized even though they only read: the tree is
//! immutable once built and contention is expected to be low, so a
//! reader/writer split is not used.

use crate::error::{IndexError, ResolveError};
use crate::tree::content_type::ContentTypes;
use crate::tree::node::Node;
use crate::tree::path::{entry_segments, request_segments, trim_request_path};
use crate::tree::walker::WalkEntry;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Statistics gathered by the last successful build
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexStats {
    pub directories: usize,
    pub files: usize,
    /// Entries skipped because a node already existed at their path
    pub duplicates: usize,
    pub max_depth: usize,
    pub duration_ms: u128,
    pub built_at: Option<DateTime<Utc>>,
}

impl IndexStats {
    /// Total number of indexed entries, excluding the root
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }
}

#[derive(Debug)]
struct IndexState {
    root: Arc<Node>,
    stats: IndexStats,
}

/// Outcome of inserting one walk entry
enum Insertion {
    Added { depth: usize, is_dir: bool },
    Duplicate,
}

/// Tree index: build once, resolve many times
#[derive(Debug)]
pub struct TreeIndex {
    state: Mutex<IndexState>,
    content_types: ContentTypes,
}

impl Default for TreeIndex {
    fn default() -> Self {
        Self::new(ContentTypes::default())
    }
}

impl TreeIndex {
    /// Create an empty index (root only)
    pub fn new(content_types: ContentTypes) -> Self {
        Self {
            state: Mutex::new(IndexState {
                root: Arc::new(Node::root()),
                stats: IndexStats::default(),
            }),
            content_types,
        }
    }

    /// Insert every entry into a fresh tree and publish it
    ///
    /// Ancestors must already be present when a descendant arrives, which a
    /// pre-order walk guarantees. A second entry for an existing path is
    /// skipped (first-wins), so a built subtree is never replaced.
    ///
    /// The tree is only published once every entry has been inserted; on
    /// error the index stays empty and may be built again. Once a build has
    /// succeeded the tree is frozen and later calls fail with
    /// [`IndexError::AlreadyBuilt`].
    #[instrument(skip_all)]
    pub fn build<I>(&self, entries: I) -> Result<IndexStats, IndexError>
    where
        I: IntoIterator<Item = WalkEntry>,
    {
        let start = Instant::now();
        let mut state = self.state.lock();
        if state.stats.built_at.is_some() {
            return Err(IndexError::AlreadyBuilt);
        }

        let mut root = Node::root();
        let mut stats = IndexStats::default();

        for entry in entries {
            match insert(&mut root, &entry, &self.content_types) {
                Ok(Insertion::Added { depth, is_dir }) => {
                    if is_dir {
                        stats.directories += 1;
                    } else {
                        stats.files += 1;
                    }
                    stats.max_depth = stats.max_depth.max(depth);
                }
                Ok(Insertion::Duplicate) => {
                    debug!(path = %entry.path, "Skipping duplicate entry");
                    stats.duplicates += 1;
                }
                Err(e) => {
                    warn!(path = %entry.path, error = %e, "Index build failed");
                    return Err(e);
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis();
        stats.built_at = Some(Utc::now());
        state.root = Arc::new(root);
        state.stats = stats.clone();
        drop(state);

        info!(
            directories = stats.directories,
            files = stats.files,
            duplicates = stats.duplicates,
            max_depth = stats.max_depth,
            duration_ms = stats.duration_ms,
            "Index build completed"
        );

        Ok(stats)
    }

    /// Resolve a slash-separated path below the root
    ///
    /// An empty path (or one made only of slashes) resolves to the root.
    /// Descent stops at the first file: any segments after it are ignored and
    /// the file itself is returned.
    pub fn resolve(&self, path: &str) -> Result<Arc<Node>, ResolveError> {
        let state = self.state.lock();
        let mut current = &state.root;

        for segment in request_segments(path) {
            if !current.is_dir() {
                break;
            }
            current = current
                .child(segment)
                .ok_or_else(|| ResolveError::NotFound {
                    path: trim_request_path(path).to_string(),
                    segment: segment.to_string(),
                })?;
        }

        Ok(Arc::clone(current))
    }

    /// Snapshot of the root node
    pub fn root(&self) -> Arc<Node> {
        Arc::clone(&self.state.lock().root)
    }

    pub fn stats(&self) -> IndexStats {
        self.state.lock().stats.clone()
    }

    /// Number of nodes in the tree, including the root
    pub fn len(&self) -> usize {
        self.state.lock().root.subtree_len()
    }

    /// Whether nothing beyond the root has been indexed
    pub fn is_empty(&self) -> bool {
        self.state.lock().root.child_count() == 0
    }
}

/// Insert a single entry below `root`
fn insert(
    root: &mut Node,
    entry: &WalkEntry,
    content_types: &ContentTypes,
) -> Result<Insertion, IndexError> {
    let segments = entry_segments(&entry.path);
    let Some((last, ancestors)) = segments.split_last() else {
        return Err(IndexError::EmptyPath);
    };

    let mut current = root;
    for (depth, segment) in ancestors.iter().enumerate() {
        let child = current.children_mut().get_mut(*segment).ok_or_else(|| {
            IndexError::MissingAncestor {
                path: entry.path.clone(),
                ancestor: segments[..=depth].join("/"),
            }
        })?;
        if !child.is_dir() {
            return Err(IndexError::NotADirectory {
                path: entry.path.clone(),
                ancestor: segments[..=depth].join("/"),
            });
        }
        current = Arc::make_mut(child);
    }

    if current.child(last).is_some() {
        return Ok(Insertion::Duplicate);
    }

    let name = if entry.name.is_empty() {
        last.to_string()
    } else {
        entry.name.clone()
    };
    let content_type = if entry.is_dir {
        None
    } else {
        content_types.classify(last)
    };
    let node = Node::new(segments.join("/"), name, entry.is_dir, content_type);
    current
        .children_mut()
        .insert(last.to_string(), Arc::new(node));

    Ok(Insertion::Added {
        depth: segments.len(),
        is_dir: entry.is_dir,
    })
}
