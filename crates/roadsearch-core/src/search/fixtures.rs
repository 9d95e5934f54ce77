//! Small graphs shared by the strategy tests

use crate::graph::{Coord, RoadEdge, RoadGraph, VertexId};

pub const A: VertexId = VertexId(1);
pub const B: VertexId = VertexId(2);
pub const C: VertexId = VertexId(3);
pub const D: VertexId = VertexId(4);
pub const E: VertexId = VertexId(5);
pub const F: VertexId = VertexId(6);

/// A→B(1), B→C(1), A→C(4), C→D(1), B→D(5); E and F are isolated.
///
/// All coordinates sit at the origin so every heuristic estimates 0.
pub fn diamond() -> RoadGraph {
    let mut graph = RoadGraph::new();
    for vertex in [A, B, C, D, E, F] {
        graph.add_node(vertex, Coord::new(0.0, 0.0));
    }
    for (from, to, length) in [(A, B, 1.0), (B, C, 1.0), (A, C, 4.0), (C, D, 1.0), (B, D, 5.0)] {
        graph
            .add_edge(from, to, RoadEdge::with_length(length))
            .expect("fixture edge");
    }
    graph
}

/// A 4x4 grid of unit-length two-way streets, 0.001 degrees apart.
///
/// Vertex `row * 4 + col + 1` sits at `(row * 0.001, col * 0.001)`.
pub fn grid() -> RoadGraph {
    let mut graph = RoadGraph::new();
    let id = |row: i64, col: i64| VertexId(row * 4 + col + 1);
    for row in 0..4 {
        for col in 0..4 {
            graph.add_node(id(row, col), Coord::new(row as f64 * 0.001, col as f64 * 0.001));
        }
    }
    for row in 0..4 {
        for col in 0..4 {
            let here = id(row, col);
            if col + 1 < 4 {
                let right = id(row, col + 1);
                graph.add_edge(here, right, RoadEdge::with_length(111.0)).expect("edge");
                graph.add_edge(right, here, RoadEdge::with_length(111.0)).expect("edge");
            }
            if row + 1 < 4 {
                let down = id(row + 1, col);
                graph.add_edge(here, down, RoadEdge::with_length(111.0)).expect("edge");
                graph.add_edge(down, here, RoadEdge::with_length(111.0)).expect("edge");
            }
        }
    }
    graph
}
