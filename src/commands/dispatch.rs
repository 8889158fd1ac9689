//! Command dispatch logic for treepath
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands, TreeArgs};
use crate::commands;
use treepath_core::config::{SearchConfig, CONFIG_FILE_NAME};
use treepath_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Demo { tree }) => {
            let config = resolve_config(cli, tree)?;
            debug!(elapsed = ?start.elapsed(), "resolve_config");
            commands::demo::execute(cli, &config)
        }

        Some(Commands::Search {
            from,
            to,
            algorithm,
            max_depth,
            validate,
            tree,
        }) => {
            let mut config = resolve_config(cli, tree)?;
            if let Some(algorithm) = algorithm {
                config.algorithm = *algorithm;
            }
            if max_depth.is_some() {
                config.max_depth = *max_depth;
            }
            config.validate |= *validate;
            debug!(elapsed = ?start.elapsed(), "resolve_config");
            commands::search::execute(cli, &config, *from, *to)
        }

        Some(Commands::Check { tree }) => {
            let config = resolve_config(cli, tree)?;
            debug!(elapsed = ?start.elapsed(), "resolve_config");
            commands::check::execute(cli, &config)
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("treepath {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Path finding over weighted star trees.");
    println!();
    println!("Run `treepath --help` for usage information.");
    Ok(())
}

/// Explicit `--config`, else `./treepath.toml` if present, else defaults;
/// tree flags override whatever was loaded
fn resolve_config(cli: &Cli, tree: &TreeArgs) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None if Path::new(CONFIG_FILE_NAME).is_file() => {
            SearchConfig::load(Path::new(CONFIG_FILE_NAME))?
        }
        None => SearchConfig::default(),
    };

    tree.apply(&mut config.builder);
    Ok(config)
}
