//! In-memory road network
//!
//! A directed multigraph keyed by [`VertexId`]. Successors and parallel edges
//! keep their insertion order so neighbor enumeration is deterministic.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::provider::{CoordinateProvider, GraphProvider};
use super::types::{Coord, VertexId, DEFAULT_EDGE_WEIGHT};
use crate::error::{Result, SearchError};

/// Attributes of one directed road segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadEdge {
    /// Segment length in meters, if known
    pub length: Option<f64>,
    /// Intermediate shape points between the two endpoints
    pub geometry: Option<Vec<Coord>>,
}

impl RoadEdge {
    pub fn with_length(length: f64) -> Self {
        RoadEdge {
            length: Some(length),
            geometry: None,
        }
    }

    /// Effective traversal weight
    pub fn weight(&self) -> f64 {
        self.length.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

#[derive(Debug, Clone)]
struct Successor {
    to: VertexId,
    edges: Vec<RoadEdge>,
}

/// Directed multigraph with per-vertex coordinates
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    order: Vec<VertexId>,
    coords: HashMap<VertexId, Coord>,
    adjacency: HashMap<VertexId, Vec<Successor>>,
}

/// On-disk node-link document
#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: VertexId,
    /// Latitude
    y: f64,
    /// Longitude
    x: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: VertexId,
    to: VertexId,
    #[serde(default)]
    length: Option<f64>,
    /// Shape points as `[lon, lat]` pairs
    #[serde(default)]
    geometry: Option<Vec<[f64; 2]>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, or move an existing one to `coord`
    pub fn add_node(&mut self, id: VertexId, coord: Coord) {
        if self.coords.insert(id, coord).is_none() {
            self.order.push(id);
        }
    }

    /// Append a directed edge. Parallel edges are kept behind the first one.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, edge: RoadEdge) -> Result<()> {
        for vertex in [from, to] {
            if !self.coords.contains_key(&vertex) {
                return Err(SearchError::UnknownVertex { vertex });
            }
        }
        if let Some(length) = edge.length {
            if !length.is_finite() || length < 0.0 {
                crate::bail_invalid!("edge length", format!("{from}->{to}: {length}"));
            }
        }

        let successors = self.adjacency.entry(from).or_default();
        match successors.iter_mut().find(|s| s.to == to) {
            Some(successor) => successor.edges.push(edge),
            None => successors.push(Successor {
                to,
                edges: vec![edge],
            }),
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency
            .values()
            .flat_map(|successors| successors.iter())
            .map(|s| s.edges.len())
            .sum()
    }

    /// Vertices in insertion order
    pub fn nodes(&self) -> &[VertexId] {
        &self.order
    }

    /// First parallel edge `from -> to`
    pub fn first_edge(&self, from: VertexId, to: VertexId) -> Option<&RoadEdge> {
        self.adjacency
            .get(&from)?
            .iter()
            .find(|s| s.to == to)
            .and_then(|s| s.edges.first())
    }

    /// Load a graph from a JSON node-link file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SearchError::io_operation("read graph", path.display(), e))?;
        let graph = Self::parse_document(&content, path)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_loaded"
        );
        Ok(graph)
    }

    /// Parse a JSON node-link document held in memory
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse_document(content, Path::new("<memory>"))
    }

    fn parse_document(content: &str, origin: &Path) -> Result<Self> {
        let doc: GraphDocument = serde_json::from_str(content)
            .map_err(|e| SearchError::invalid_graph(origin, e))?;

        let mut graph = RoadGraph::new();
        for node in doc.nodes {
            graph.add_node(node.id, Coord::new(node.y, node.x));
        }
        for record in doc.edges {
            let edge = RoadEdge {
                length: record.length,
                geometry: record.geometry.map(|points| {
                    points
                        .into_iter()
                        .map(|[lon, lat]| Coord::new(lat, lon))
                        .collect()
                }),
            };
            graph
                .add_edge(record.from, record.to, edge)
                .map_err(|e| SearchError::invalid_graph(origin, e))?;
        }
        Ok(graph)
    }

    /// Polyline for a path, following edge geometry where the graph has it
    pub fn path_coords(&self, path: &[VertexId]) -> Result<Vec<Coord>> {
        let Some(&first) = path.first() else {
            return Ok(Vec::new());
        };
        let mut coords = vec![self.require_coord(first)?];

        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let edge = self
                .first_edge(from, to)
                .ok_or(SearchError::MissingEdge { from, to })?;
            match &edge.geometry {
                Some(points) if !points.is_empty() => coords.extend(points.iter().copied()),
                _ => coords.push(self.require_coord(to)?),
            }
        }
        Ok(coords)
    }

    /// Pick two distinct vertices uniformly at random
    pub fn random_endpoints<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(VertexId, VertexId)> {
        let n = self.order.len();
        if n < 2 {
            crate::bail_invalid!("graph for endpoint selection", format!("{n} node(s)"));
        }
        let start = rng.gen_range(0..n);
        let mut goal = rng.gen_range(0..n - 1);
        if goal >= start {
            goal += 1;
        }
        Ok((self.order[start], self.order[goal]))
    }

    fn require_coord(&self, vertex: VertexId) -> Result<Coord> {
        self.coordinate(vertex)
            .ok_or(SearchError::MissingCoordinate { vertex })
    }
}

impl GraphProvider for RoadGraph {
    fn contains(&self, vertex: VertexId) -> bool {
        self.coords.contains_key(&vertex)
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.adjacency
            .get(&vertex)
            .map(|successors| successors.iter().map(|s| s.to).collect())
            .unwrap_or_default()
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.first_edge(from, to).map(RoadEdge::weight)
    }
}

impl CoordinateProvider for RoadGraph {
    fn coordinate(&self, vertex: VertexId) -> Option<Coord> {
        self.coords.get(&vertex).copied()
    }
}
