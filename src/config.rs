//! Configuration System
//!
//! Layered configuration for the media tree server: built-in defaults, a
//! global config file, a local `mediatree.toml`, then `MEDIATREE__*`
//! environment variables. CLI flags are applied on top by the binary.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use crate::server::RESERVED_ROUTES;
use crate::tree::{ContentTypes, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::local_file::LOCAL_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaTreeConfig {
    /// Directory to index and serve
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Walk and classification settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// URL prefix under which directory listings are served
    #[serde(default = "default_listing_prefix")]
    pub listing_prefix: String,

    /// URL prefix under which raw file bytes are served
    #[serde(default = "default_media_prefix")]
    pub media_prefix: String,
}

/// Index build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Index dot-files and dot-directories
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Basenames skipped with their whole subtree
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum walk depth below the media root
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Extra extension -> content type mappings
    #[serde(default)]
    pub content_types: HashMap<String, String>,
}

pub(crate) fn default_media_root() -> PathBuf {
    PathBuf::from("./media")
}

pub(crate) fn default_bind() -> String {
    "0.0.0.0:9000".to_string()
}

pub(crate) fn default_listing_prefix() -> String {
    "/home".to_string()
}

pub(crate) fn default_media_prefix() -> String {
    "/media".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            listing_prefix: default_listing_prefix(),
            media_prefix: default_media_prefix(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            include_hidden: default_true(),
            ignore_patterns: Vec::new(),
            max_depth: None,
            content_types: HashMap::new(),
        }
    }
}

impl Default for MediaTreeConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            server: ServerConfig::default(),
            index: IndexConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Server: {0}")]
    Server(String),
    #[error("Index: {0}")]
    Index(String),
    #[error("Media root: {0}")]
    MediaRoot(String),
}

impl ServerConfig {
    /// Parsed listen address
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        self.bind
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind, e))
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.bind_addr() {
            errors.push(e);
        }
        for (name, prefix) in [
            ("listing_prefix", &self.listing_prefix),
            ("media_prefix", &self.media_prefix),
        ] {
            if !prefix.starts_with('/') {
                errors.push(format!("{} must start with '/': '{}'", name, prefix));
                continue;
            }
            if prefix.trim_end_matches('/').is_empty() {
                errors.push(format!("{} cannot be the site root", name));
                continue;
            }
            if prefix.contains(['*', ':', '{', '}']) {
                errors.push(format!(
                    "{} cannot contain route pattern characters: '{}'",
                    name, prefix
                ));
            }
            let normalized = normalize_prefix(prefix);
            for reserved in RESERVED_ROUTES {
                if prefixes_overlap(&normalized, reserved) {
                    errors.push(format!(
                        "{} '{}' overlaps the reserved route '{}'",
                        name, normalized, reserved
                    ));
                }
            }
        }
        if prefixes_overlap(
            &normalize_prefix(&self.listing_prefix),
            &normalize_prefix(&self.media_prefix),
        ) {
            errors.push(
                "listing_prefix and media_prefix must differ and not be nested in each other"
                    .to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Listing prefix without a trailing slash
    pub fn listing_prefix(&self) -> String {
        normalize_prefix(&self.listing_prefix)
    }

    /// Media prefix without a trailing slash
    pub fn media_prefix(&self) -> String {
        normalize_prefix(&self.media_prefix)
    }
}

fn normalize_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim_matches('/'))
}

/// True when `a` and `b` are equal or one sits under the other
fn prefixes_overlap(a: &str, b: &str) -> bool {
    let nested = |outer: &str, inner: &str| {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
    };
    a == b || nested(a, b) || nested(b, a)
}

impl IndexConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            include_hidden: self.include_hidden,
            max_depth: self.max_depth,
        }
    }

    pub fn content_types(&self) -> ContentTypes {
        ContentTypes::with_overrides(&self.content_types)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == Some(0) {
            return Err("max_depth must be at least 1".to_string());
        }
        if self.ignore_patterns.iter().any(|p| p.is_empty() || p.contains('/')) {
            return Err("ignore_patterns must be plain, non-empty basenames".to_string());
        }
        Ok(())
    }
}

impl MediaTreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.media_root.as_os_str().is_empty() {
            errors.push(ValidationError::MediaRoot(
                "media_root cannot be empty".to_string(),
            ));
        }
        if let Err(server_errors) = self.server.validate() {
            errors.extend(server_errors.into_iter().map(ValidationError::Server));
        }
        if let Err(e) = self.index.validate() {
            errors.push(ValidationError::Index(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one [`AppError`]
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            AppError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
