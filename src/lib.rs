//! mediatree: browseable media directory listings
//!
//! Indexes a directory tree once at startup into an in-memory tree and serves
//! listings of it over HTTP, resolving slash-separated request paths to nodes.

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod server;
pub mod tree;
