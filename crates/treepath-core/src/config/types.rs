//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::search::Algorithm;

/// Search configuration, usually read from `treepath.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default strategy
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Depth cap for the iterative-deepening strategies (absent = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<i64>,

    /// Use the tree-validating BFS variant
    #[serde(default)]
    pub validate: bool,

    /// Generated tree shape
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Star-tree builder parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_degree")]
    pub degree: i64,

    #[serde(default = "default_radius")]
    pub radius: i64,

    /// RNG seed; a fresh seed is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_degree() -> i64 {
    4
}

fn default_radius() -> i64 {
    6
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_depth: None,
            validate: false,
            builder: BuilderConfig::default(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            degree: default_degree(),
            radius: default_radius(),
            seed: None,
        }
    }
}
