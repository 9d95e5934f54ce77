//! `roadsearch endpoints`: a random start/goal pair

use serde_json::json;

use crate::cli::{EndpointsArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::output::{format_coord, print_json};
use crate::commands::route::{load_graph, pick_endpoints};
use roadsearch_core::error::{Result, SearchError};
use roadsearch_core::graph::CoordinateProvider;

pub fn execute(ctx: &CommandContext, args: &EndpointsArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let (start, goal) = pick_endpoints(&graph, args.seed)?;
    let start_coord = graph
        .coordinate(start)
        .ok_or(SearchError::MissingCoordinate { vertex: start })?;
    let goal_coord = graph
        .coordinate(goal)
        .ok_or(SearchError::MissingCoordinate { vertex: goal })?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": start,
            "goal": goal,
            "start_coord": start_coord,
            "goal_coord": goal_coord,
            "nodes": graph.node_count(),
        }))?,
        OutputFormat::Human => {
            println!("Start: {} ({})", start, format_coord(&start_coord));
            println!("Goal:  {} ({})", goal, format_coord(&goal_coord));
            if !ctx.cli.quiet {
                println!("Picked from {} nodes", graph.node_count());
            }
        }
        OutputFormat::Records => {
            println!(
                "H roadsearch=1 records=1 mode=endpoints nodes={}",
                graph.node_count()
            );
            println!(
                "E start={} goal={} start_lat={:.6} start_lon={:.6} goal_lat={:.6} goal_lon={:.6}",
                start, goal, start_coord.lat, start_coord.lon, goal_coord.lat, goal_coord.lon
            );
        }
    }

    Ok(())
}
