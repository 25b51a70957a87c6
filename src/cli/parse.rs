//! CLI parse: clap types for mediatree. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mediatree - browse a media directory over HTTP
#[derive(Parser)]
#[command(name = "mediatree")]
#[command(about = "Index a media directory and serve browseable listings over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory to index (overrides media_root from config)
    #[arg(long)]
    pub media_root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index the media root and serve listings until interrupted
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Index the media root and print it as an outline
    Tree,
    /// Index the media root and print the listing of one path
    Resolve {
        /// Path below the media root; empty for the root
        #[arg(default_value = "")]
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
