//! Search strategies over a [`GraphProvider`]
//!
//! Four strategies share one contract: given a graph, a start and a goal
//! (plus coordinates for A*) and an optional observer, return the path found
//! and how many vertices were visited.
//! - `bfs`: fewest edges
//! - `dfs`: any path, stack order
//! - `ucs`: minimum total weight
//! - `astar`: minimum total weight guided by a distance heuristic
//!
//! [`run_strategy`] dispatches on the closed [`Strategy`] enum and supplies
//! the right arguments for each one.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod frontier;
pub mod heuristic;
pub mod observer;
pub mod path;
pub mod ucs;

#[cfg(test)]
pub(crate) mod fixtures;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use heuristic::{Heuristic, HeuristicKind};
pub use observer::{SearchObserver, StopFlag, VisitLimit, VisitTrace};
pub use path::{reconstruct_path, Predecessors};
pub use ucs::ucs;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::graph::{CoordinateProvider, GraphProvider, VertexId};

/// The closed set of search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    AStar,
}

impl Strategy {
    /// Registry order, also the order of a comparison run
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs, Strategy::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
            Strategy::AStar => "A*",
        }
    }

    /// Whether the strategy consumes vertex coordinates
    pub fn needs_coordinates(&self) -> bool {
        matches!(self, Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "ucs" => Ok(Strategy::Ucs),
            "a*" | "astar" | "a-star" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = SearchError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.name().to_string()
    }
}

/// Output of a single search: the path (empty if none) and the visit count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub path: Vec<VertexId>,
    pub visited: usize,
}

impl SearchResult {
    pub fn new(path: Vec<VertexId>, visited: usize) -> Self {
        SearchResult { path, visited }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Everything a strategy may need besides its endpoints
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub graph: &'a dyn GraphProvider,
    pub coords: &'a dyn CoordinateProvider,
    pub heuristic: Heuristic,
}

impl<'a> SearchContext<'a> {
    pub fn new(graph: &'a dyn GraphProvider, coords: &'a dyn CoordinateProvider) -> Self {
        SearchContext {
            graph,
            coords,
            heuristic: Heuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Run one strategy between two vertices of the graph
pub fn run_strategy(
    strategy: Strategy,
    ctx: &SearchContext<'_>,
    start: VertexId,
    goal: VertexId,
    observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    for vertex in [start, goal] {
        if !ctx.graph.contains(vertex) {
            return Err(SearchError::UnknownVertex { vertex });
        }
    }

    match strategy {
        Strategy::Bfs => bfs(ctx.graph, start, goal, observer),
        Strategy::Dfs => dfs(ctx.graph, start, goal, observer),
        Strategy::Ucs => ucs(ctx.graph, start, goal, observer),
        Strategy::AStar => astar(ctx.graph, ctx.coords, ctx.heuristic, start, goal, observer),
    }
}

/// Resolve a strategy by name and run it; unknown names fail before searching
pub fn run_named(
    name: &str,
    ctx: &SearchContext<'_>,
    start: VertexId,
    goal: VertexId,
    observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    let strategy: Strategy = name.parse()?;
    run_strategy(strategy, ctx, start, goal, observer)
}
