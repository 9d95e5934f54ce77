//! `roadsearch search`: one strategy between two vertices

use std::time::Instant;

use serde::Serialize;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::observer::CliObserver;
use crate::commands::output::{format_coord, print_block, print_json};
use crate::commands::route::{heuristic, resolve_route};
use roadsearch_core::compare::{render_human, render_records, Comparison, RunRecord};
use roadsearch_core::config::SearchConfig;
use roadsearch_core::error::Result;
use roadsearch_core::format::join_path;
use roadsearch_core::graph::{Coord, VertexId};
use roadsearch_core::search::{run_strategy, SearchContext};

#[derive(Serialize)]
struct SearchOutput<'a> {
    start: VertexId,
    goal: VertexId,
    #[serde(flatten)]
    record: &'a RunRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    coords: Option<&'a [Coord]>,
}

pub fn execute(ctx: &CommandContext, config: &SearchConfig, args: &SearchArgs) -> Result<()> {
    let route = resolve_route(&args.route)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let search_ctx = SearchContext::new(&route.graph, &route.graph)
        .with_heuristic(heuristic(config, args.route.heuristic));
    let (mut observer, _stop) = CliObserver::for_route(&args.route);

    let started = Instant::now();
    let result = run_strategy(
        args.algorithm,
        &search_ctx,
        route.start,
        route.goal,
        Some(&mut observer),
    )?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    trace_command!(ctx.cli, ctx.start, "search");

    let record = RunRecord::completed(args.algorithm, result, elapsed_ms, &route.graph)?;
    let coords = if args.coords && record.is_success() {
        Some(route.graph.path_coords(&record.path)?)
    } else {
        None
    };
    let comparison = Comparison::new(route.start, route.goal, vec![record]);
    let record = &comparison.records[0];

    match ctx.cli.format {
        OutputFormat::Json => print_json(&SearchOutput {
            start: route.start,
            goal: route.goal,
            record,
            coords: coords.as_deref(),
        })?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Route {} -> {}", route.start, route.goal);
                println!();
            }
            print_block(&render_human(&comparison));
            if record.is_success() {
                println!();
                println!("Path: {}", join_path(&record.path).replace(',', " -> "));
            }
            if let Some(coords) = &coords {
                println!("Polyline ({} points):", coords.len());
                for coord in coords {
                    println!("  {}", format_coord(coord));
                }
            }
        }
        OutputFormat::Records => {
            print_block(&render_records(&comparison, "search"));
            for coord in coords.iter().flatten() {
                println!("C lat={:.6} lon={:.6}", coord.lat, coord.lon);
            }
        }
    }

    Ok(())
}
