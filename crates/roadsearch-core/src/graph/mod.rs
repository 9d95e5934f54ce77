//! Graph abstraction consumed by the search strategies
//!
//! - `GraphProvider` / `CoordinateProvider` traits for pluggable data sources
//! - `RoadGraph`, an in-memory directed multigraph loaded from JSON
//! - `path_length` for measuring a found path

pub mod provider;
pub mod road;
pub mod types;

pub use provider::{CoordinateProvider, GraphProvider};
pub use road::{RoadEdge, RoadGraph};
pub use types::{Coord, VertexId, DEFAULT_EDGE_WEIGHT};

use crate::error::{Result, SearchError};

/// Total weight of a path, summing the first parallel edge of each hop.
///
/// An empty or single-vertex path has length 0.
pub fn path_length(provider: &dyn GraphProvider, path: &[VertexId]) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (pair[0], pair[1]);
        provider
            .edge_weight(from, to)
            .map(|weight| total + weight)
            .ok_or(SearchError::MissingEdge { from, to })
    })
}
