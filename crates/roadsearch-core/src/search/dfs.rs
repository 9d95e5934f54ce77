use std::collections::HashSet;

use super::observer::{notify, SearchObserver};
use super::path::{reconstruct_path, Predecessors};
use super::{SearchResult, Strategy};
use crate::error::Result;
use crate::graph::{GraphProvider, VertexId};

/// Depth-first search with an explicit stack.
///
/// No optimality guarantee; the path depends on neighbor order. The visit
/// count is the number of vertices actually popped and processed.
#[tracing::instrument(skip(graph, observer), fields(start = %start, goal = %goal))]
pub fn dfs(
    graph: &dyn GraphProvider,
    start: VertexId,
    goal: VertexId,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    let mut stack = vec![start];
    let mut predecessors = Predecessors::from([(start, None)]);
    let mut explored = HashSet::new();

    while let Some(current) = stack.pop() {
        // Stale duplicate
        if !explored.insert(current) {
            continue;
        }

        notify(&mut observer, Strategy::Dfs, current, &explored)?;

        if current == goal {
            break;
        }

        for neighbor in graph.neighbors(current) {
            if !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor, Some(current));
                stack.push(neighbor);
            }
        }
    }

    let result = SearchResult::new(reconstruct_path(&predecessors, goal), explored.len());
    tracing::debug!(found = result.found(), visited = result.visited, "dfs_done");
    Ok(result)
}
