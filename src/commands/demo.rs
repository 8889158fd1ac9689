//! `treepath demo` command - build a star tree and race every algorithm
//!
//! Source and target are drawn from an RNG seeded like the builder, so a
//! fixed `--seed` reproduces the whole run.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{generate_tree, millis};
use treepath_core::config::SearchConfig;
use treepath_core::error::Result;
use treepath_core::{Algorithm, NodeId, WeightedPath};

#[derive(Debug, Serialize)]
struct Run {
    algorithm: &'static str,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<WeightedPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    seed: u64,
    nodes: usize,
    build_ms: f64,
    acyclic: bool,
    check_ms: f64,
    source: NodeId,
    target: NodeId,
    runs: Vec<Run>,
    agreed: bool,
}

/// Execute the demo command
pub fn execute(cli: &Cli, config: &SearchConfig) -> Result<()> {
    let generated = generate_tree(&config.builder)?;
    let tree = &generated.tree;

    let start = Instant::now();
    let acyclic = tree.is_acyclic()?;
    let check_ms = millis(start.elapsed());

    let mut rng = StdRng::seed_from_u64(generated.seed);
    let count = tree.node_count() as NodeId;
    let source = rng.gen_range(0..count);
    let target = rng.gen_range(0..count);

    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let finder = algorithm.pathfinder(config.max_depth, config.validate)?;
        let start = Instant::now();
        let outcome = finder.search(tree, source, target);
        let elapsed_ms = millis(start.elapsed());

        let (path, error) = match outcome {
            Ok(path) => (Some(path), None),
            Err(e) => (None, Some(e.to_string())),
        };
        runs.push(Run {
            algorithm: finder.name(),
            elapsed_ms,
            path,
            error,
        });
    }

    let agreed = runs
        .windows(2)
        .all(|pair| pair[0].path.is_some() && pair[0].path == pair[1].path);
    tracing::debug!(source, target, agreed, "demo finished");

    let report = DemoReport {
        seed: generated.seed,
        nodes: tree.node_count(),
        build_ms: millis(generated.elapsed),
        acyclic,
        check_ms,
        source,
        target,
        runs,
        agreed,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(cli, &report),
    }

    Ok(())
}

fn print_human(cli: &Cli, report: &DemoReport) {
    if !cli.quiet {
        println!("<<< seed = {} >>>", report.seed);
        println!("built the tree in {:.3} ms", report.build_ms);
        println!("number of nodes in the tree: {}", report.nodes);
        println!("the tree is acyclic: {}", report.acyclic);
        println!("acyclicity check in {:.3} ms", report.check_ms);
        println!();
        println!("source node: {}", report.source);
        println!("target node: {}", report.target);
        println!();
    }

    for run in &report.runs {
        match (&run.path, &run.error) {
            (Some(path), _) => println!(
                "{:<20} {:>10.3} ms  {} hops, cost {:.6}",
                run.algorithm,
                run.elapsed_ms,
                path.node_count() - 1,
                path.total_cost()
            ),
            (None, Some(error)) => {
                println!("{:<20} {:>10.3} ms  {}", run.algorithm, run.elapsed_ms, error)
            }
            (None, None) => println!("{:<20} {:>10.3} ms", run.algorithm, run.elapsed_ms),
        }
    }

    println!();
    println!("algorithms agree: {}", report.agreed);
}
