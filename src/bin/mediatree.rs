//! mediatree CLI Binary
//!
//! Indexes a media directory and serves browseable listings over HTTP.

use anyhow::Context;
use clap::Parser;
use mediatree::cli::{apply_overrides, Cli, RunContext};
use mediatree::config::{ConfigLoader, MediaTreeConfig};
use mediatree::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build config from config files, env vars, and CLI args
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(media_root = %config.media_root.display(), "mediatree starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{}", mediatree::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", mediatree::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration and apply CLI overrides.
/// Precedence: CLI flags override environment override config files override defaults.
fn load_config(cli: &Cli) -> anyhow::Result<MediaTreeConfig> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            ConfigLoader::load(&cwd).context("Failed to load configuration")?
        }
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}
