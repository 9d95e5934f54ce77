use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::frontier::HeapEntry;
use super::observer::{notify, SearchObserver};
use super::path::{reconstruct_path, Predecessors};
use super::{SearchResult, Strategy};
use crate::error::{Result, SearchError};
use crate::graph::{GraphProvider, VertexId};

/// Uniform-cost search (Dijkstra with lazy deletion).
///
/// The queue may hold several entries for one vertex after its cost improves;
/// stale entries are dropped when popped because the vertex is already
/// visited. The goal is checked on pop, before the visited set, so the goal
/// itself is not counted as visited.
#[tracing::instrument(skip(graph, observer), fields(start = %start, goal = %goal))]
pub fn ucs(
    graph: &dyn GraphProvider,
    start: VertexId,
    goal: VertexId,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    let mut heap = BinaryHeap::from([Reverse(HeapEntry::new(0.0, start))]);
    let mut costs = HashMap::from([(start, 0.0)]);
    let mut predecessors = Predecessors::from([(start, None)]);
    let mut visited = HashSet::new();

    while let Some(Reverse(HeapEntry {
        priority: current_cost,
        vertex: current,
    })) = heap.pop()
    {
        if current == goal {
            break;
        }

        if !visited.insert(current) {
            continue;
        }

        notify(&mut observer, Strategy::Ucs, current, &visited)?;

        for neighbor in graph.neighbors(current) {
            let weight = graph
                .edge_weight(current, neighbor)
                .ok_or(SearchError::MissingEdge {
                    from: current,
                    to: neighbor,
                })?;
            let new_cost = current_cost + weight;

            if costs.get(&neighbor).map_or(true, |&known| new_cost < known) {
                costs.insert(neighbor, new_cost);
                predecessors.insert(neighbor, Some(current));
                heap.push(Reverse(HeapEntry::new(new_cost, neighbor)));
            }
        }
    }

    let result = SearchResult::new(reconstruct_path(&predecessors, goal), visited.len());
    tracing::debug!(
        found = result.found(),
        visited = result.visited,
        cost = costs.get(&goal).copied(),
        "ucs_done"
    );
    Ok(result)
}
