//! CLI domain: parse, route and output only.
//! Commands are dispatched from a single route table in `RunContext`.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ListFormat};
pub use route::{apply_overrides, RunContext};
