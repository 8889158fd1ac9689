//! `treepath check` command - acyclicity check on a generated tree

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{generate_tree, millis};
use treepath_core::config::SearchConfig;
use treepath_core::error::Result;

/// Execute the check command
pub fn execute(cli: &Cli, config: &SearchConfig) -> Result<()> {
    let generated = generate_tree(&config.builder)?;
    let tree = &generated.tree;

    let start = Instant::now();
    let acyclic = tree.is_acyclic()?;
    let check_time = start.elapsed();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "seed": generated.seed,
                "nodes": tree.node_count(),
                "edges": tree.edge_count(),
                "acyclic": acyclic,
                "elapsed_ms": millis(check_time),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("seed: {}", generated.seed);
                println!("nodes: {}, edges: {}", tree.node_count(), tree.edge_count());
            }
            println!("acyclic: {}", acyclic);
            if !cli.quiet {
                println!("checked in {:.3} ms", millis(check_time));
            }
        }
    }

    Ok(())
}
