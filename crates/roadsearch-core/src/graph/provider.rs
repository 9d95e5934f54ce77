use std::collections::HashMap;

use super::types::{Coord, VertexId};

/// Trait for providing graph adjacency and edge weights
pub trait GraphProvider {
    /// Whether the vertex exists in the graph
    fn contains(&self, vertex: VertexId) -> bool;

    /// Distinct successors of `vertex`, in the order they were first connected
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId>;

    /// Weight of the first parallel edge `from -> to`.
    ///
    /// Returns `None` only when no such edge exists. An edge without a
    /// length reports [`super::DEFAULT_EDGE_WEIGHT`].
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64>;
}

/// Trait for looking up vertex coordinates (A* heuristic input)
pub trait CoordinateProvider {
    fn coordinate(&self, vertex: VertexId) -> Option<Coord>;
}

impl CoordinateProvider for HashMap<VertexId, Coord> {
    fn coordinate(&self, vertex: VertexId) -> Option<Coord> {
        self.get(&vertex).copied()
    }
}
