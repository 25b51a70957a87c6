//! Local config file source: mediatree.toml in the base directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// File name looked up in the base directory
pub const LOCAL_CONFIG_FILE: &str = "mediatree.toml";

/// Add the local config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = base_dir.join(LOCAL_CONFIG_FILE);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
