//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::search::heuristic::METERS_PER_DEGREE;
use crate::search::{HeuristicKind, Strategy};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// A* heuristic settings
    #[serde(default)]
    pub astar: AstarConfig,

    /// Comparison run settings
    #[serde(default)]
    pub compare: CompareConfig,
}

/// Configuration for the A* heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstarConfig {
    /// Heuristic family: "euclidean", "haversine" or "zero"
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Scale from degree differences to meters (euclidean only)
    #[serde(default = "default_meters_per_degree")]
    pub meters_per_degree: f64,
}

/// Configuration for comparison runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Strategies to run, in order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_meters_per_degree() -> f64 {
    METERS_PER_DEGREE
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            version: CONFIG_FORMAT_VERSION,
            astar: AstarConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

impl Default for AstarConfig {
    fn default() -> Self {
        AstarConfig {
            heuristic: HeuristicKind::default(),
            meters_per_degree: default_meters_per_degree(),
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            strategies: default_strategies(),
        }
    }
}
