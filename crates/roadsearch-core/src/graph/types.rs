use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight used for an edge that carries no `length` attribute
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Opaque vertex handle (an OpenStreetMap node id for road graphs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub i64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VertexId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(VertexId)
            .map_err(|_| format!("invalid vertex id '{}' (expected an integer)", s))
    }
}

/// A point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coord { lat, lon }
    }
}
