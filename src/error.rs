//! Error types for the media tree index and its server.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking the media root or building the index
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Cannot insert {path}: ancestor '{ancestor}' is not in the index")]
    MissingAncestor { path: String, ancestor: String },

    #[error("Cannot insert {path}: ancestor '{ancestor}' is a file, not a directory")]
    NotADirectory { path: String, ancestor: String },

    #[error("Entry has an empty relative path")]
    EmptyPath,

    #[error("Index is already built")]
    AlreadyBuilt,

    #[error("Failed to walk {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Media root is not a directory: {0:?}")]
    RootNotDirectory(PathBuf),

    #[error("Index I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lookup failures returned by [`crate::tree::index::TreeIndex::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Path not found: {path} (no entry named '{segment}')")]
    NotFound { path: String, segment: String },
}

/// Application-level errors: configuration, logging and serving
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error(transparent)]
    NotFound(#[from] ResolveError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
