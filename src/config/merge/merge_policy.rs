//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("media_root", "./media")?
        .set_default("server.bind", "0.0.0.0:9000")?
        .set_default("server.listing_prefix", "/home")?
        .set_default("server.media_prefix", "/media")?
        .set_default("index.follow_symlinks", false)?
        .set_default("index.include_hidden", true)
}
