//! Tree builder: walks the media root and builds the index

use crate::error::IndexError;
use crate::tree::content_type::ContentTypes;
use crate::tree::index::TreeIndex;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Builds a [`TreeIndex`] from a directory on disk
pub struct TreeBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
    content_types: ContentTypes,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
            content_types: ContentTypes::default(),
        }
    }

    /// Set walker config (ignore patterns, hidden files, depth).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Replace the content-type table used to classify files
    pub fn with_content_types(mut self, content_types: ContentTypes) -> Self {
        self.content_types = content_types;
        self
    }

    /// Walk the media root and build a fully populated index
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<TreeIndex, IndexError> {
        let start = Instant::now();
        info!("Starting index build");

        let root = dunce::canonicalize(&self.root)?;
        if !root.is_dir() {
            error!("Media root is not a directory");
            return Err(IndexError::RootNotDirectory(root));
        }

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let entries = match walker.walk() {
            Ok(e) => {
                debug!(entry_count = e.len(), "Walked filesystem");
                e
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        let index = TreeIndex::new(self.content_types.clone());
        let stats = index.build(entries)?;

        info!(
            entries = stats.entries(),
            duration_ms = start.elapsed().as_millis(),
            "Media root indexed"
        );
        Ok(index)
    }
}
