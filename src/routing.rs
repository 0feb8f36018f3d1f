//! Route, reach and node listing commands

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use campusnav_core::render::{FloorSelection, FloorView, RenderStyle, render_svg, route_to_geojson};
use campusnav_core::routing::distances_from;
use campusnav_core::{Algorithm, CampusGraph, PathResult, find_path};
use serde_json::json;
use tracing::info;

use crate::cli::{NodesArgs, OutputFormat, ReachArgs, RouteArgs};
use crate::config::AppConfig;
use crate::error::AppError;

/// Human readable route summary
pub fn format_route(graph: &CampusGraph, route: &PathResult) -> String {
    format!(
        "Route: {}\nLength: {:.2}\nAlgorithm: {}",
        route.labels(graph).join(" -> "),
        route.total_weight,
        route.algorithm.title()
    )
}

fn route_json(graph: &CampusGraph, route: &PathResult) -> serde_json::Value {
    json!({
        "path": route.path,
        "labels": route.labels(graph),
        "total_weight": route.total_weight,
        "algorithm": route.algorithm,
    })
}

/// Renders floor plans into `dir`, one file per floor tab unless `only` picks
/// a single one. Returns the written files in tab order.
pub fn write_floor_plans(
    graph: &CampusGraph,
    route: Option<&PathResult>,
    dir: &Path,
    draw_weights: bool,
    only: Option<FloorSelection>,
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir)?;

    let tabs = match only {
        Some(selection) => vec![selection],
        None => FloorSelection::tabs(graph),
    };

    let mut written = Vec::with_capacity(tabs.len());
    for selection in tabs {
        let view = FloorView::new(graph, selection, route)?;
        let title = match route {
            Some(route) => format!(
                "{}: {} -> {} ({})",
                selection.title(),
                route.start(),
                route.end(),
                route.algorithm.title()
            ),
            None => selection.title(),
        };
        let style = RenderStyle {
            draw_weights,
            ..RenderStyle::default()
        }
        .with_title(title);

        let svg = render_svg(graph, &view, &style)?;
        let path = dir.join(format!("{}.svg", selection.file_stem()));
        fs::write(&path, svg)?;
        written.push(path);
    }

    info!("Wrote {} floor plans to {}", written.len(), dir.display());
    Ok(written)
}

/// Writes the route as a GeoJSON feature collection
pub fn write_geojson(graph: &CampusGraph, route: &PathResult, path: &Path) -> Result<(), AppError> {
    let collection = route_to_geojson(graph, route)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&collection)?)?;
    info!("Wrote route GeoJSON to {}", path.display());
    Ok(())
}

pub fn run_route(
    graph: &CampusGraph,
    config: &AppConfig,
    args: &RouteArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let default = config.default_algorithm;
    let algorithm = args
        .algorithm
        .as_deref()
        .map_or(default, |name| Algorithm::parse_or(name, default));
    let route = find_path(graph, &args.start, &args.end, algorithm)?;

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", format_route(graph, &route))?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&route_json(graph, &route))?
        )?,
    }

    if let Some(dir) = &args.svg_dir {
        let draw_weights = config.draw_weights && !args.no_weights;
        let written = write_floor_plans(graph, Some(&route), dir, draw_weights, args.floor)?;
        if args.format == OutputFormat::Text {
            for path in written {
                writeln!(out, "Saved {}", path.display())?;
            }
        }
    }

    if let Some(path) = &args.geojson {
        write_geojson(graph, &route, path)?;
        if args.format == OutputFormat::Text {
            writeln!(out, "Saved {}", path.display())?;
        }
    }
    Ok(())
}

pub fn run_reach(
    graph: &CampusGraph,
    args: &ReachArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let reached = distances_from(graph, &args.start, args.max_cost)?;

    match args.format {
        OutputFormat::Text => {
            for (node, distance) in reached {
                writeln!(out, "{distance:>8.2}  {}", node.display_name())?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = reached
                .iter()
                .map(|(node, distance)| {
                    json!({ "id": node.id, "label": node.label, "distance": distance })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
    }
    Ok(())
}

pub fn run_nodes(
    graph: &CampusGraph,
    args: &NodesArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    for node in graph.sorted_nodes() {
        if args.floor.is_some_and(|floor| node.floor != Some(floor)) {
            continue;
        }
        writeln!(out, "{}", node.display_name())?;
    }
    Ok(())
}
