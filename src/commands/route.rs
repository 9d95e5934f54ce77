//! Graph loading and endpoint resolution shared by the commands

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{GraphArgs, RouteArgs};
use roadsearch_core::bail_usage;
use roadsearch_core::config::SearchConfig;
use roadsearch_core::error::Result;
use roadsearch_core::graph::{RoadGraph, VertexId};
use roadsearch_core::search::{Heuristic, HeuristicKind};

/// A loaded graph and the two vertices to route between
pub struct Route {
    pub graph: RoadGraph,
    pub start: VertexId,
    pub goal: VertexId,
}

pub fn load_graph(args: &GraphArgs) -> Result<RoadGraph> {
    RoadGraph::load(&args.graph)
}

/// Pick two distinct vertices, reproducibly when a seed is given
pub fn pick_endpoints(graph: &RoadGraph, seed: Option<u64>) -> Result<(VertexId, VertexId)> {
    match seed {
        Some(seed) => graph.random_endpoints(&mut StdRng::seed_from_u64(seed)),
        None => graph.random_endpoints(&mut rand::thread_rng()),
    }
}

pub fn resolve_route(args: &RouteArgs) -> Result<Route> {
    let graph = load_graph(&args.graph)?;

    let (start, goal) = match (args.random, args.start, args.goal) {
        (true, _, _) => pick_endpoints(&graph, args.seed)?,
        (false, Some(start), Some(goal)) => (start, goal),
        _ => bail_usage!("either --start and --goal, or --random, is required"),
    };
    tracing::debug!(%start, %goal, random = args.random, "route_resolved");

    Ok(Route { graph, start, goal })
}

/// Configured heuristic, with the command line taking precedence
pub fn heuristic(config: &SearchConfig, kind: Option<HeuristicKind>) -> Heuristic {
    match kind {
        Some(kind) => Heuristic::from_kind(kind, config.astar.meters_per_degree),
        None => config.heuristic(),
    }
}
