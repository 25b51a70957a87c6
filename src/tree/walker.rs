//! Filesystem walker feeding the tree index

use crate::error::IndexError;
use crate::tree::path::relative_index_path;
use std::path::PathBuf;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// One entry produced by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walked root, `/`-separated
    pub path: String,
    /// Basename of the entry
    pub name: String,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self::from_path(path.into(), false)
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self::from_path(path.into(), true)
    }

    fn from_path(path: String, is_dir: bool) -> Self {
        let name = path
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();
        Self { path, name, is_dir }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Basenames to skip, together with everything beneath them
    pub ignore_patterns: Vec<String>,
    /// Whether dot-files and dot-directories are indexed
    pub include_hidden: bool,
    /// Maximum depth to traverse below the root (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            include_hidden: true,
            max_depth: None,
        }
    }
}

/// Depth-first walker over a media root
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all entries below the root
    ///
    /// Entries come out in pre-order with siblings sorted by file name, so a
    /// directory always precedes its descendants.
    pub fn walk(&self) -> Result<Vec<WalkEntry>, IndexError> {
        let mut entries = Vec::new();

        let mut walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1)
            .sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let iter = walker
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in iter {
            let entry = entry.map_err(|e| IndexError::Walk {
                path: e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| self.root.clone()),
                message: e.to_string(),
            })?;

            let file_type = entry.file_type();
            if !file_type.is_dir() && !file_type.is_file() {
                debug!(path = %entry.path().display(), "Skipping special entry");
                continue;
            }

            let Some(path) = relative_index_path(&self.root, entry.path()) else {
                continue;
            };
            trace!(path = %path, is_dir = file_type.is_dir(), "Walked entry");

            entries.push(WalkEntry {
                path,
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }

        Ok(entries)
    }

    /// Check if an entry (and its subtree) should be skipped
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if !self.config.include_hidden && name.starts_with('.') {
            return true;
        }

        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}
