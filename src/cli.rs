//! Command line arguments

use std::path::PathBuf;

use campusnav_core::render::FloorSelection;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Shortest routes between rooms of a multi-floor building
#[derive(Parser, Debug)]
#[command(name = "campusnav")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (defaults to ./campusnav.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Building data file, overrides the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log filter, e.g. "debug" or "campusnav_core=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two nodes
    Route(RouteArgs),
    /// List nodes reachable from a start node by distance
    Reach(ReachArgs),
    /// List the nodes of the building
    Nodes(NodesArgs),
    /// Write the sample campus data file
    Generate(GenerateArgs),
    /// Interactive route finder
    Console,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Start node id
    pub start: String,

    /// End node id
    pub end: String,

    /// dijkstra or astar; unknown names fall back to the configured default
    #[arg(short, long)]
    pub algorithm: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write one SVG floor plan per floor into this directory
    #[arg(long)]
    pub svg_dir: Option<PathBuf>,

    /// Only render this floor ("all" for the whole building)
    #[arg(long, requires = "svg_dir")]
    pub floor: Option<FloorSelection>,

    /// Write the route as GeoJSON
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Leave edge weights off the floor plans
    #[arg(long)]
    pub no_weights: bool,
}

#[derive(Args, Debug)]
pub struct ReachArgs {
    /// Start node id
    pub start: String,

    /// Only list nodes within this distance
    #[arg(long)]
    pub max_cost: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Only list nodes on this floor
    #[arg(long)]
    pub floor: Option<i32>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file, defaults to the configured data path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_route_arguments() {
        let cli = Cli::try_parse_from([
            "campusnav", "-vv", "route", "SPORT", "LIB", "--algorithm", "astar", "--svg-dir",
            "out", "--floor", "2",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Route(args) = cli.command else {
            panic!("expected route command");
        };
        assert_eq!(args.start, "SPORT");
        assert_eq!(args.algorithm.as_deref(), Some("astar"));
        assert_eq!(args.floor, Some(FloorSelection::Floor(2)));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["campusnav", "nodes", "--data", "b.json", "--floor", "3"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("b.json")));
        assert!(matches!(cli.command, Commands::Nodes(NodesArgs { floor: Some(3) })));
    }

    #[test]
    fn test_floor_requires_svg_dir() {
        assert!(Cli::try_parse_from(["campusnav", "route", "A", "B", "--floor", "1"]).is_err());
    }
}
