//! Argument groups shared by several subcommands

use clap::Args;

use treepath_core::config::BuilderConfig;

/// Shape of the generated star tree; unset flags fall back to the config file
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Children of the root (inner nodes get one fewer)
    #[arg(long, allow_negative_numbers = true)]
    pub degree: Option<i64>,

    /// Depth parameter of the star tree
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<i64>,

    /// RNG seed; random when neither this nor the config sets one
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TreeArgs {
    /// Overlay these flags onto a builder configuration
    pub fn apply(&self, builder: &mut BuilderConfig) {
        if let Some(degree) = self.degree {
            builder.degree = degree;
        }
        if let Some(radius) = self.radius {
            builder.radius = radius;
        }
        if self.seed.is_some() {
            builder.seed = self.seed;
        }
    }
}
