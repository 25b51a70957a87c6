//! Configuration sources, one module per layer.

pub(super) mod environment;
pub mod global_file;
pub mod local_file;
