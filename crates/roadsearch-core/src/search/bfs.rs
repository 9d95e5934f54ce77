use std::collections::{HashSet, VecDeque};

use super::observer::{notify, SearchObserver};
use super::path::{reconstruct_path, Predecessors};
use super::{SearchResult, Strategy};
use crate::error::Result;
use crate::graph::{GraphProvider, VertexId};

/// Breadth-first search; finds a path with the fewest edges.
///
/// A vertex is recorded (and enqueued) the first time it is discovered, so it
/// enters the queue at most once. The search stops when the goal is dequeued.
/// The observer sees each dequeued vertex together with the discovered set,
/// and the reported visit count is the number of discovered vertices.
#[tracing::instrument(skip(graph, observer), fields(start = %start, goal = %goal))]
pub fn bfs(
    graph: &dyn GraphProvider,
    start: VertexId,
    goal: VertexId,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    let mut queue = VecDeque::from([start]);
    let mut predecessors = Predecessors::from([(start, None)]);
    let mut discovered = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        notify(&mut observer, Strategy::Bfs, current, &discovered)?;

        if current == goal {
            break;
        }

        for neighbor in graph.neighbors(current) {
            if discovered.insert(neighbor) {
                predecessors.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    let result = SearchResult::new(reconstruct_path(&predecessors, goal), discovered.len());
    tracing::debug!(found = result.found(), visited = result.visited, "bfs_done");
    Ok(result)
}
