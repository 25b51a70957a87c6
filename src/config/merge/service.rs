//! MergeService: orchestrates sources, applies merge policy, deserializes to MediaTreeConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::MediaTreeConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> global file -> local file -> environment (highest).
    pub fn load(base_dir: &Path) -> Result<MediaTreeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, base_dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<MediaTreeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
