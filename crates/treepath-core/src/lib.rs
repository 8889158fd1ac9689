//! Treepath Core Library
//!
//! Weighted tree model and path-finding strategies: breadth-first,
//! depth-first, iterative-deepening and their bidirectional variants.

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod search;
pub mod tree;

pub use builder::StarTreeBuilder;
pub use error::{Result, TreePathError};
pub use path::{WeightedEdge, WeightedPath};
pub use search::{Algorithm, Pathfinder};
pub use tree::{NodeId, TreeNode, WeightedTree};
