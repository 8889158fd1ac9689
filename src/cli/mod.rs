//! CLI argument parsing for treepath
//!
//! Supports global flags: --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::TreeArgs;
pub use output::OutputFormat;
use treepath_core::Algorithm;

/// Treepath - path finding over weighted star trees
#[derive(Parser, Debug)]
#[command(name = "treepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./treepath.toml when present)
    #[arg(long, global = true, env = "TREEPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `treepath_core::search=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a star tree, check it and race every algorithm on it
    Demo {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Find the path between two nodes of a generated star tree
    Search {
        /// Source node id
        #[arg(long, allow_negative_numbers = true)]
        from: i64,

        /// Target node id
        #[arg(long, allow_negative_numbers = true)]
        to: i64,

        /// Search algorithm
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Depth cap for iddfs and bidirectional-iddfs
        #[arg(long, allow_negative_numbers = true)]
        max_depth: Option<i64>,

        /// Use the tree-validating BFS variant
        #[arg(long)]
        validate: bool,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Report whether a generated star tree is acyclic
    Check {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    value.parse::<Algorithm>().map_err(|e| e.to_string())
}
