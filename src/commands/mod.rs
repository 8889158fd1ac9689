//! Command implementations for treepath

pub mod check;
pub mod demo;
pub mod dispatch;
pub mod search;

use std::time::{Duration, Instant};

use treepath_core::config::BuilderConfig;
use treepath_core::error::Result;
use treepath_core::WeightedTree;

/// A generated tree together with what it took to build it
pub struct GeneratedTree {
    pub tree: WeightedTree,
    pub seed: u64,
    pub elapsed: Duration,
}

/// Build the configured star tree, resolving the seed first so it can be reported
pub fn generate_tree(builder: &BuilderConfig) -> Result<GeneratedTree> {
    let seed = builder.resolve_seed();
    let start = Instant::now();
    let tree = builder.build_with_seed(seed)?;
    let elapsed = start.elapsed();

    tracing::debug!(
        seed,
        degree = builder.degree,
        radius = builder.radius,
        nodes = tree.node_count(),
        ?elapsed,
        "generated tree"
    );
    Ok(GeneratedTree {
        tree,
        seed,
        elapsed,
    })
}

pub fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
