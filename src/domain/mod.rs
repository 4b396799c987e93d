//! Domain layer: the balanced word tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use tree::AvlTree;
