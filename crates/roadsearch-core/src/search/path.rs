//! Path reconstruction from a predecessor map

use std::collections::HashMap;

use crate::graph::VertexId;

/// Discovered vertex -> the vertex that discovered it (`None` for the start)
pub type Predecessors = HashMap<VertexId, Option<VertexId>>;

/// Walk predecessors back from `goal` and return the path in start-to-goal order.
///
/// Returns an empty path when the goal was never discovered. A chain that
/// loops or points at an undiscovered vertex also yields an empty path.
pub fn reconstruct_path(predecessors: &Predecessors, goal: VertexId) -> Vec<VertexId> {
    if !predecessors.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    loop {
        match predecessors.get(&current) {
            Some(None) => break,
            Some(Some(previous)) => {
                if path.len() > predecessors.len() {
                    tracing::warn!(%goal, "predecessor chain does not terminate");
                    return Vec::new();
                }
                path.push(*previous);
                current = *previous;
            }
            None => {
                tracing::warn!(%goal, vertex = %current, "predecessor chain is broken");
                return Vec::new();
            }
        }
    }

    path.reverse();
    path
}
