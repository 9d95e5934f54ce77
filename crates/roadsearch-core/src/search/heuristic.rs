//! Distance estimates for A*
//!
//! The default estimate is the planar distance between two degree coordinates
//! multiplied by a fixed meters-per-degree factor. It tracks edge lengths in
//! meters closely near the equator but is not a guaranteed lower bound at
//! every latitude. `Haversine` gives the great-circle distance, which never
//! exceeds the length of a road between the same two points.

use serde::{Deserialize, Serialize};

use crate::graph::Coord;

/// Approximate meters per degree of latitude
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Configurable heuristic family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    #[default]
    Euclidean,
    Haversine,
    /// Always 0; A* then expands exactly like UCS
    Zero,
}

impl std::str::FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(HeuristicKind::Euclidean),
            "haversine" => Ok(HeuristicKind::Haversine),
            "zero" => Ok(HeuristicKind::Zero),
            other => Err(format!(
                "unknown heuristic '{}' (expected: euclidean, haversine, zero)",
                other
            )),
        }
    }
}

/// Remaining-cost estimate between a vertex and the goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heuristic {
    ScaledEuclidean { meters_per_degree: f64 },
    Haversine,
    Zero,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::ScaledEuclidean {
            meters_per_degree: METERS_PER_DEGREE,
        }
    }
}

impl Heuristic {
    pub fn from_kind(kind: HeuristicKind, meters_per_degree: f64) -> Self {
        match kind {
            HeuristicKind::Euclidean => Heuristic::ScaledEuclidean { meters_per_degree },
            HeuristicKind::Haversine => Heuristic::Haversine,
            HeuristicKind::Zero => Heuristic::Zero,
        }
    }

    pub fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        match *self {
            Heuristic::ScaledEuclidean { meters_per_degree } => {
                let d_lat = from.lat - goal.lat;
                let d_lon = from.lon - goal.lon;
                (d_lat * d_lat + d_lon * d_lon).sqrt() * meters_per_degree
            }
            Heuristic::Haversine => haversine(from, goal),
            Heuristic::Zero => 0.0,
        }
    }
}

/// Great-circle distance in meters
pub fn haversine(a: Coord, b: Coord) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
