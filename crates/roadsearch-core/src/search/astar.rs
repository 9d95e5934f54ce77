use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::frontier::HeapEntry;
use super::heuristic::Heuristic;
use super::observer::{notify, SearchObserver};
use super::path::{reconstruct_path, Predecessors};
use super::{SearchResult, Strategy};
use crate::error::{Result, SearchError};
use crate::graph::{CoordinateProvider, GraphProvider, VertexId};

/// A* search ordered by `f = g + h`.
///
/// Same skeleton as [`super::ucs`]: lazy deletion of stale entries, goal
/// checked on pop, observer called once per newly visited vertex. The goal
/// and every relaxed neighbor must have coordinates; the start does not.
#[tracing::instrument(skip(graph, coords, observer), fields(start = %start, goal = %goal))]
pub fn astar(
    graph: &dyn GraphProvider,
    coords: &dyn CoordinateProvider,
    heuristic: Heuristic,
    start: VertexId,
    goal: VertexId,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Result<SearchResult> {
    let goal_coord = coords
        .coordinate(goal)
        .ok_or(SearchError::MissingCoordinate { vertex: goal })?;

    let mut heap = BinaryHeap::from([Reverse(HeapEntry::new(0.0, start))]);
    let mut g_score = HashMap::from([(start, 0.0)]);
    let mut predecessors = Predecessors::from([(start, None)]);
    let mut visited = HashSet::new();

    while let Some(Reverse(HeapEntry { vertex: current, .. })) = heap.pop() {
        if current == goal {
            break;
        }

        if !visited.insert(current) {
            continue;
        }

        notify(&mut observer, Strategy::AStar, current, &visited)?;

        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);

        for neighbor in graph.neighbors(current) {
            let weight = graph
                .edge_weight(current, neighbor)
                .ok_or(SearchError::MissingEdge {
                    from: current,
                    to: neighbor,
                })?;
            let tentative_g = current_g + weight;

            if g_score.get(&neighbor).map_or(true, |&known| tentative_g < known) {
                predecessors.insert(neighbor, Some(current));
                g_score.insert(neighbor, tentative_g);

                let coord = coords
                    .coordinate(neighbor)
                    .ok_or(SearchError::MissingCoordinate { vertex: neighbor })?;
                let f_score = tentative_g + heuristic.estimate(coord, goal_coord);
                heap.push(Reverse(HeapEntry::new(f_score, neighbor)));
            }
        }
    }

    let result = SearchResult::new(reconstruct_path(&predecessors, goal), visited.len());
    tracing::debug!(
        found = result.found(),
        visited = result.visited,
        cost = g_score.get(&goal).copied(),
        "astar_done"
    );
    Ok(result)
}
