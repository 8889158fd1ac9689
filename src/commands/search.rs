//! `treepath search` command - one search on a generated tree

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{generate_tree, millis};
use treepath_core::config::SearchConfig;
use treepath_core::error::Result;
use treepath_core::NodeId;

/// Execute the search command
pub fn execute(cli: &Cli, config: &SearchConfig, from: NodeId, to: NodeId) -> Result<()> {
    let finder = config.pathfinder()?;
    let generated = generate_tree(&config.builder)?;

    let start = Instant::now();
    let path = finder.search(&generated.tree, from, to)?;
    let elapsed = start.elapsed();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": finder.name(),
                "seed": generated.seed,
                "from": from,
                "to": to,
                "hops": path.node_count() - 1,
                "path": path,
                "elapsed_ms": millis(elapsed),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", path);
            if !cli.quiet {
                println!(
                    "cost: {:.6} ({} hops, {}, seed {}, {:.3} ms)",
                    path.total_cost(),
                    path.node_count() - 1,
                    finder.name(),
                    generated.seed,
                    millis(elapsed)
                );
            }
        }
    }

    Ok(())
}
