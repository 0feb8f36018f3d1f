//! Command line front end for `campusnav_core`

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod model;
pub mod routing;

use std::io::{self, Write};

use tracing::debug;

use cli::{Cli, Commands};
use config::AppConfig;
use console::Console;
use error::AppError;

/// Executes the parsed command line
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?.with_data_path(cli.data.clone());
    debug!(?config, "Resolved settings");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Generate(args) => {
            let path = args.output.as_deref().unwrap_or(config.data_path.as_path());
            let (nodes, edges) = model::generate_campus(path)?;
            writeln!(
                out,
                "Generated {} ({nodes} nodes, {edges} edges)",
                path.display()
            )?;
        }
        Commands::Route(args) => {
            let graph = model::load_campus(&config)?;
            routing::run_route(&graph, &config, args, &mut out)?;
        }
        Commands::Reach(args) => {
            let graph = model::load_campus(&config)?;
            routing::run_reach(&graph, args, &mut out)?;
        }
        Commands::Nodes(args) => {
            let graph = model::load_campus(&config)?;
            routing::run_nodes(&graph, args, &mut out)?;
        }
        Commands::Console => {
            let graph = model::load_campus(&config)?;
            let stdin = io::stdin();
            Console::new(&graph, &config, stdin.lock(), out).run()?;
        }
    }
    Ok(())
}
