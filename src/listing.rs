//! Listing producer: display-ready views of a resolved node

use crate::tree::node::{Node, ROOT_PATH};
use crate::tree::path::entry_segments;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;

/// Direct children of `node`, sorted by case-insensitive name
///
/// A file node has no children and yields an empty vector. Names that fold to
/// the same lowercase form are ordered by their exact bytes.
pub fn list_children(node: &Node) -> Vec<Arc<Node>> {
    let mut entries: Vec<Arc<Node>> = node.children().values().cloned().collect();
    entries.sort_by_cached_key(|entry| (entry.name().to_lowercase(), entry.name().to_string()));
    entries
}

/// One step of the path leading to a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    /// Cumulative index path up to and including this segment
    pub path: String,
}

/// A resolved node together with its sorted children
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    /// Index path of the node (empty for the root)
    pub path: String,
    pub node: Arc<Node>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub entries: Vec<Arc<Node>>,
}

impl Listing {
    /// Build the listing of a resolved node
    ///
    /// Path and breadcrumbs follow the node's own index path, so segments a
    /// request carried past a file never show up.
    pub fn for_node(node: Arc<Node>) -> Self {
        let path = match node.path() {
            ROOT_PATH => String::new(),
            path => path.to_string(),
        };
        let mut breadcrumbs = Vec::new();
        let mut cumulative = String::new();
        for segment in entry_segments(&path) {
            if !cumulative.is_empty() {
                cumulative.push('/');
            }
            cumulative.push_str(segment);
            breadcrumbs.push(Breadcrumb {
                name: segment.to_string(),
                path: cumulative.clone(),
            });
        }

        let entries = list_children(&node);
        Self {
            path,
            node,
            breadcrumbs,
            entries,
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Render a node and its subtree as an indented outline, one entry per line
pub fn render_outline(node: &Node) -> String {
    let mut out = String::new();
    write_outline(node, 0, &mut out);
    out
}

fn write_outline(node: &Node, depth: usize, out: &mut String) {
    let marker = if node.is_dir() { "/" } else { "" };
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}{}{}", "  ".repeat(depth), node.name(), marker);
    for child in list_children(node) {
        write_outline(&child, depth + 1, out);
    }
}
