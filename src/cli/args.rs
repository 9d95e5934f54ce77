//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_heuristic, parse_positive_count, parse_strategy, parse_vertex};
use roadsearch_core::graph::VertexId;
use roadsearch_core::search::{HeuristicKind, Strategy};

/// Graph file shared by every command
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Road graph in JSON node-link form
    #[arg(long, short)]
    pub graph: PathBuf,
}

/// Endpoints and search controls shared by `search` and `compare`
#[derive(Args, Debug)]
pub struct RouteArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start vertex id
    #[arg(long, short, value_parser = parse_vertex, required_unless_present = "random")]
    pub start: Option<VertexId>,

    /// Goal vertex id
    #[arg(long, value_parser = parse_vertex, required_unless_present = "random")]
    pub goal: Option<VertexId>,

    /// Pick start and goal at random
    #[arg(long, conflicts_with_all = ["start", "goal"])]
    pub random: bool,

    /// Seed for --random, for reproducible endpoints
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Cancel a run once this many vertices have been visited
    #[arg(long, value_parser = parse_positive_count)]
    pub max_visited: Option<usize>,

    /// Log every vertex as it is finalized
    #[arg(long)]
    pub trace: bool,

    /// Override the configured A* heuristic (euclidean, haversine, zero)
    #[arg(long, value_parser = parse_heuristic)]
    pub heuristic: Option<HeuristicKind>,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    /// Strategy to run (BFS, DFS, UCS, A*)
    #[arg(long, short, value_parser = parse_strategy, default_value = "A*")]
    pub algorithm: Strategy,

    /// Include the path polyline, following edge geometry
    #[arg(long)]
    pub coords: bool,
}

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    /// Comma-separated strategies, in run order (defaults to the config list)
    #[arg(long, short, value_parser = parse_strategy, value_delimiter = ',')]
    pub algorithms: Vec<Strategy>,
}

/// Arguments for the endpoints command.
#[derive(Args, Debug)]
pub struct EndpointsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Seed for reproducible endpoints
    #[arg(long)]
    pub seed: Option<u64>,
}
