//! Path-finding strategies over weighted trees
//!
//! Every strategy implements [`Pathfinder`]:
//! - `bfs`: breadth-first search, optionally validating the tree shape
//! - `dfs`: depth-first search
//! - `iddfs`: iterative-deepening depth-first search
//! - `bidirectional_bfs`: two breadth-first frontiers meeting in the middle
//! - `bidirectional_iddfs`: depth-window probing from both ends
//!
//! Since a tree has exactly one simple path between two nodes, all
//! strategies return the same path; they differ in time and memory.

pub mod bfs;
pub mod bidirectional_bfs;
pub mod bidirectional_iddfs;
pub mod dfs;
pub mod iddfs;
pub mod traceback;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreePathError};
use crate::path::WeightedPath;
use crate::tree::{NodeId, WeightedTree};

pub use bfs::BreadthFirstSearch;
pub use bidirectional_bfs::BidirectionalBreadthFirstSearch;
pub use bidirectional_iddfs::BidirectionalIterativeDeepeningSearch;
pub use dfs::DepthFirstSearch;
pub use iddfs::IterativeDeepeningSearch;

/// Uniform entry point shared by all search strategies
pub trait Pathfinder: fmt::Debug + Send + Sync {
    /// Find the path from `source` to `target`
    ///
    /// Fails with [`TreePathError::UnknownNode`] if either id is absent and
    /// with [`TreePathError::PathNotFound`] if no walk connects them within
    /// the strategy's search space. `source == target` yields a single-node
    /// path of cost 0.
    fn search(&self, tree: &WeightedTree, source: NodeId, target: NodeId) -> Result<WeightedPath>;

    /// Short strategy name used in logs and CLI output
    fn name(&self) -> &'static str;
}

/// Validate a maximum-depth parameter
pub(crate) fn check_maximum_depth(depth: i64) -> Result<usize> {
    if depth < 0 {
        crate::bail_invalid!("maximum depth", format!("{} (must be at least 0)", depth));
    }
    Ok(usize::try_from(depth).unwrap_or(usize::MAX))
}

/// Selectable search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Iddfs,
    #[default]
    BidirectionalBfs,
    BidirectionalIddfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Iddfs,
        Algorithm::BidirectionalBfs,
        Algorithm::BidirectionalIddfs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Iddfs => "iddfs",
            Algorithm::BidirectionalBfs => "bidirectional-bfs",
            Algorithm::BidirectionalIddfs => "bidirectional-iddfs",
        }
    }

    /// Build a pathfinder for this strategy
    ///
    /// `max_depth` applies to the depth-bounded strategies (unbounded when
    /// `None`); `validate` selects the tree-validating BFS.
    pub fn pathfinder(
        &self,
        max_depth: Option<i64>,
        validate: bool,
    ) -> Result<Box<dyn Pathfinder>> {
        let finder: Box<dyn Pathfinder> = match self {
            Algorithm::Bfs if validate => Box::new(BreadthFirstSearch::validating()),
            Algorithm::Bfs => Box::new(BreadthFirstSearch::new()),
            Algorithm::Dfs => Box::new(DepthFirstSearch),
            Algorithm::Iddfs => Box::new(match max_depth {
                Some(depth) => IterativeDeepeningSearch::new(depth)?,
                None => IterativeDeepeningSearch::unbounded(),
            }),
            Algorithm::BidirectionalBfs => Box::new(BidirectionalBreadthFirstSearch),
            Algorithm::BidirectionalIddfs => Box::new(match max_depth {
                Some(depth) => BidirectionalIterativeDeepeningSearch::new(depth)?,
                None => BidirectionalIterativeDeepeningSearch::unbounded(),
            }),
        };
        Ok(finder)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = TreePathError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::as_str).collect();
                TreePathError::invalid_value(
                    "algorithm",
                    format!("{} (expected one of: {})", s, expected.join(", ")),
                )
            })
    }
}
