//! Media Tree Index
//!
//! Represents the media root as an in-memory tree built once from a
//! filesystem walk and resolved on every request.

pub mod builder;
pub mod content_type;
pub mod index;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::TreeBuilder;
pub use content_type::ContentTypes;
pub use index::{IndexStats, TreeIndex};
pub use node::Node;
pub use walker::{WalkEntry, Walker, WalkerConfig};
