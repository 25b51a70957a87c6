//! CLI route: single route table and run context.

use crate::cli::output::{format_listing_json, format_listing_text};
use crate::cli::parse::{Cli, Commands, ListFormat};
use crate::config::MediaTreeConfig;
use crate::error::AppError;
use crate::listing::{render_outline, Listing};
use crate::server::Server;
use crate::tree::{TreeBuilder, TreeIndex};
use std::sync::Arc;
use tracing::{debug, info, Level};

/// Apply CLI flags on top of the loaded configuration.
/// Precedence: CLI flags override config file override defaults.
pub fn apply_overrides(config: &mut MediaTreeConfig, cli: &Cli) {
    if let Some(ref root) = cli.media_root {
        config.media_root = root.clone();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = file.clone();
    }
    if let Commands::Serve {
        bind: Some(ref bind),
    } = cli.command
    {
        config.server.bind = bind.clone();
    }
}

/// Runtime context for CLI execution: the validated configuration.
pub struct RunContext {
    config: MediaTreeConfig,
}

impl RunContext {
    /// Create run context from a fully merged configuration.
    pub fn new(config: MediaTreeConfig) -> Result<Self, AppError> {
        config.ensure_valid()?;
        Ok(Self { config })
    }

    /// Walk the media root and build the index
    pub fn build_index(&self) -> Result<TreeIndex, AppError> {
        let index = TreeBuilder::new(self.config.media_root.clone())
            .with_walker_config(self.config.index.walker_config())
            .with_content_types(self.config.index.content_types())
            .build()?;
        Ok(index)
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Serve { .. } => self.serve(),
            Commands::Tree => {
                let index = self.build_index()?;
                Ok(render_outline(&index.root()).trim_end().to_string())
            }
            Commands::Resolve { path, format } => {
                let index = self.build_index()?;
                let node = index.resolve(path)?;
                let listing = Listing::for_node(node);
                match format {
                    ListFormat::Text => Ok(format_listing_text(&listing)),
                    ListFormat::Json => format_listing_json(&listing),
                }
            }
        }
    }

    fn serve(&self) -> Result<String, AppError> {
        let index = Arc::new(self.build_index()?);
        if tracing::enabled!(Level::DEBUG) {
            debug!("Indexed tree:\n{}", render_outline(&index.root()));
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::ServerError(format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(async {
            let mut server = Server::start(&self.config, index).await?;
            tokio::signal::ctrl_c()
                .await
                .map_err(|e| AppError::ServerError(format!("Failed to listen for Ctrl-C: {}", e)))?;
            info!("Shutdown requested");
            server.shutdown()?;
            server.stopped().await
        })?;

        Ok("Server stopped".to_string())
    }
}
