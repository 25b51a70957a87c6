//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::MediaTreeConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    ///
    /// `base_dir` is searched for a local `mediatree.toml`.
    pub fn load(base_dir: &Path) -> Result<MediaTreeConfig, ConfigError> {
        MergeService::load(base_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<MediaTreeConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
