//! Configuration for treepath
//!
//! Stored as TOML; every key is optional and falls back to its default.

pub mod types;

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::builder::StarTreeBuilder;
use crate::error::Result;
use crate::search::Pathfinder;
use crate::tree::WeightedTree;

pub use types::{BuilderConfig, SearchConfig};

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "treepath.toml";

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), algorithm = %config.algorithm, "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the configured strategy
    pub fn pathfinder(&self) -> Result<Box<dyn Pathfinder>> {
        self.algorithm.pathfinder(self.max_depth, self.validate)
    }
}

impl BuilderConfig {
    /// Seed to use: the configured one, or a fresh random seed
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Generate a star tree with these parameters and `seed`
    pub fn build_with_seed(&self, seed: u64) -> Result<WeightedTree> {
        let mut builder =
            StarTreeBuilder::new(self.degree, self.radius, StdRng::seed_from_u64(seed))?;
        Ok(builder.build())
    }

    /// Generate a star tree with these parameters
    pub fn build(&self) -> Result<WeightedTree> {
        self.build_with_seed(self.resolve_seed())
    }
}
