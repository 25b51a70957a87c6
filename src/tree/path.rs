//! Relative path utilities for the index
//!
//! Index paths are always `/`-separated and relative to the media root,
//! independent of the host platform's separator.

use std::path::{Component, Path};

/// Split an entry path into its non-empty segments
///
/// Leading, trailing and repeated slashes do not produce segments.
pub fn entry_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Strip surrounding slashes from a request path
///
/// The result is empty when the request addresses the root.
pub fn trim_request_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a trimmed request path into segments
///
/// Interior empty segments are kept so that `a//b` looks up an entry with an
/// empty name (which never exists) instead of silently matching `a/b`.
pub fn request_segments(path: &str) -> Vec<&str> {
    let trimmed = trim_request_path(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Convert a path below `root` into a `/`-separated relative path
///
/// Returns `None` for the root itself or for paths outside of it.
pub fn relative_index_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Join a prefix and an index path into a URL path
///
/// Each segment is percent-encoded; the root path `.` maps to the prefix.
pub fn url_path(prefix: &str, index_path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let encoded: Vec<String> = entry_segments(index_path)
        .into_iter()
        .filter(|s| *s != ".")
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();

    if encoded.is_empty() {
        format!("{}/", prefix)
    } else {
        format!("{}/{}", prefix, encoded.join("/"))
    }
}
