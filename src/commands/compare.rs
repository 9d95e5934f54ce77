//! `roadsearch compare`: several strategies on the same route

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::observer::CliObserver;
use crate::commands::output::{print_block, print_json};
use crate::commands::route::{heuristic, resolve_route};
use roadsearch_core::compare::{render_human, render_records, run_comparison, RunStatus};
use roadsearch_core::config::SearchConfig;
use roadsearch_core::error::{Result, SearchError};
use roadsearch_core::search::SearchContext;

pub fn execute(ctx: &CommandContext, config: &SearchConfig, args: &CompareArgs) -> Result<()> {
    let route = resolve_route(&args.route)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let strategies = if args.algorithms.is_empty() {
        config.compare.strategies.as_slice()
    } else {
        args.algorithms.as_slice()
    };

    let search_ctx = SearchContext::new(&route.graph, &route.graph)
        .with_heuristic(heuristic(config, args.route.heuristic));
    let (mut observer, stop) = CliObserver::for_route(&args.route);

    let comparison = run_comparison(
        strategies,
        &search_ctx,
        route.start,
        route.goal,
        Some(&mut observer),
    );
    trace_command!(ctx.cli, ctx.start, "compare");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&comparison)?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Route {} -> {} ({} strategies)",
                    route.start,
                    route.goal,
                    comparison.records.len()
                );
                println!();
            }
            print_block(&render_human(&comparison));
        }
        OutputFormat::Records => print_block(&render_records(&comparison, "compare")),
    }

    // An interrupted comparison still prints what it has, then fails
    if stop.is_stopped() {
        if let Some(record) = comparison
            .records
            .iter()
            .find(|r| r.status == RunStatus::Cancelled)
        {
            return Err(SearchError::Cancelled {
                strategy: record.strategy,
                visited: record.visited,
            });
        }
    }

    Ok(())
}
