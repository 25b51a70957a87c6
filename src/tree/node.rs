//! Indexed filesystem node

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Name given to the root node of every index
pub const ROOT_NAME: &str = "root";

/// Relative path of the root node
pub const ROOT_PATH: &str = ".";

/// A single indexed entry (file or directory) and its immediate children
///
/// Children are shared through `Arc` so that a node resolved from the index
/// can be handed out and read after the index lock is released.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    name: String,
    path: String,
    is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(skip)]
    children: HashMap<String, Arc<Node>>,
}

impl Node {
    /// Create a node with an empty children map
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        is_dir: bool,
        content_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
            content_type: if is_dir { None } else { content_type },
            children: HashMap::new(),
        }
    }

    /// Create the root directory node
    pub fn root() -> Self {
        Self::new(ROOT_PATH, ROOT_NAME, true, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path relative to the media root, `/`-separated
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Content type derived from the file extension, if known
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn children(&self) -> &HashMap<String, Arc<Node>> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Arc<Node>> {
        self.children.get(name)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn children_mut(&mut self) -> &mut HashMap<String, Arc<Node>> {
        &mut self.children
    }

    /// Count this node and every node beneath it
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .values()
            .map(|child| child.subtree_len())
            .sum::<usize>()
    }
}
