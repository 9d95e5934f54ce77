//! Comparison harness
//!
//! Runs strategies one after another against the same start/goal pair, times
//! each call and normalizes the outcome into a [`RunRecord`]. Aggregates in
//! [`ComparisonSummary`] only ever consider successful runs, so a "no path"
//! result is never mistaken for an instant or free one.

pub mod render;

pub use render::{render_human, render_records};

use std::cmp::Ordering;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, SearchError};
use crate::graph::{path_length, GraphProvider, VertexId};
use crate::search::{run_strategy, SearchContext, SearchObserver, SearchResult, Strategy};

/// How a single run ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum RunStatus {
    Found,
    NoPath,
    Cancelled,
    Failed(String),
}

impl RunStatus {
    pub fn label(&self) -> &str {
        match self {
            RunStatus::Found => "found",
            RunStatus::NoPath => "no path",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Failed(reason) => reason,
        }
    }
}

/// Normalized outcome of one strategy run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub status: RunStatus,
    /// Wall-clock time of the search; absent when it was cancelled or failed
    pub elapsed_ms: Option<f64>,
    pub visited: usize,
    pub path_nodes: usize,
    /// Total edge weight of the path; present only on success
    pub distance_m: Option<f64>,
    pub path: Vec<VertexId>,
}

impl RunRecord {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Found
    }

    /// Path nodes per visited node, 0 when nothing was visited
    pub fn efficiency(&self) -> f64 {
        if self.visited == 0 {
            0.0
        } else {
            self.path_nodes as f64 / self.visited as f64
        }
    }

    /// Record for a search that returned normally, measuring a found path
    pub fn completed(
        strategy: Strategy,
        result: SearchResult,
        elapsed_ms: f64,
        graph: &dyn GraphProvider,
    ) -> Result<Self> {
        if !result.found() {
            return Ok(RunRecord {
                elapsed_ms: Some(elapsed_ms),
                ..RunRecord::failed(strategy, RunStatus::NoPath, result.visited)
            });
        }

        let distance = path_length(graph, &result.path)?;
        Ok(RunRecord {
            strategy,
            status: RunStatus::Found,
            elapsed_ms: Some(elapsed_ms),
            visited: result.visited,
            path_nodes: result.path.len(),
            distance_m: Some(distance),
            path: result.path,
        })
    }

    fn failed(strategy: Strategy, status: RunStatus, visited: usize) -> Self {
        RunRecord {
            strategy,
            status,
            elapsed_ms: None,
            visited,
            path_nodes: 0,
            distance_m: None,
            path: Vec::new(),
        }
    }
}

/// The strategy holding a summary title and the value it won with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leader {
    pub strategy: Strategy,
    pub value: f64,
}

/// Best-of aggregates over the successful runs of a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub fastest: Option<Leader>,
    pub shortest: Option<Leader>,
    pub fewest_visited: Option<Leader>,
    pub best_ratio: Option<Leader>,
}

impl ComparisonSummary {
    /// Ties go to the earliest record in run order
    pub fn from_records(records: &[RunRecord]) -> Self {
        let successes: Vec<&RunRecord> = records.iter().filter(|r| r.is_success()).collect();

        ComparisonSummary {
            fastest: leader(&successes, |r| r.elapsed_ms, Ordering::Less),
            shortest: leader(&successes, |r| r.distance_m, Ordering::Less),
            fewest_visited: leader(&successes, |r| Some(r.visited as f64), Ordering::Less),
            best_ratio: leader(&successes, |r| Some(r.efficiency()), Ordering::Greater),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fastest.is_none()
    }
}

/// Pick the record whose metric compares as `wins` against every other
fn leader(
    records: &[&RunRecord],
    metric: impl Fn(&RunRecord) -> Option<f64>,
    wins: Ordering,
) -> Option<Leader> {
    records
        .iter()
        .copied()
        .filter_map(|r| {
            metric(r).map(|value| Leader {
                strategy: r.strategy,
                value,
            })
        })
        .reduce(|best, candidate| {
            if candidate.value.total_cmp(&best.value) == wins {
                candidate
            } else {
                best
            }
        })
}

/// Every record of a comparison run plus its aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub start: VertexId,
    pub goal: VertexId,
    pub records: Vec<RunRecord>,
    pub summary: ComparisonSummary,
}

impl Comparison {
    pub fn new(start: VertexId, goal: VertexId, records: Vec<RunRecord>) -> Self {
        let summary = ComparisonSummary::from_records(&records);
        Comparison {
            start,
            goal,
            records,
            summary,
        }
    }

    /// Records in display order: successes by elapsed time, then failures
    /// in run order
    pub fn sorted_records(&self) -> Vec<&RunRecord> {
        let mut sorted: Vec<&RunRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            let key = |r: &RunRecord| (!r.is_success(), r.elapsed_ms.unwrap_or(f64::INFINITY));
            let (a_failed, a_ms) = key(a);
            let (b_failed, b_ms) = key(b);
            a_failed.cmp(&b_failed).then(a_ms.total_cmp(&b_ms))
        });
        sorted
    }
}

/// Run one strategy and classify its outcome; never fails
pub fn run_single(
    strategy: Strategy,
    ctx: &SearchContext<'_>,
    start: VertexId,
    goal: VertexId,
    observer: Option<&mut dyn SearchObserver>,
) -> RunRecord {
    let started = Instant::now();
    let outcome = run_strategy(strategy, ctx, start, goal, observer);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    crate::trace_time!(started, "run_single", strategy = strategy.name());

    let result = match outcome {
        Ok(result) => result,
        Err(SearchError::Cancelled { visited, .. }) => {
            return RunRecord::failed(strategy, RunStatus::Cancelled, visited);
        }
        Err(e) => {
            tracing::warn!(%strategy, error = %e, "strategy failed");
            return RunRecord::failed(strategy, RunStatus::Failed(e.to_string()), 0);
        }
    };

    let visited = result.visited;
    RunRecord::completed(strategy, result, elapsed_ms, ctx.graph).unwrap_or_else(|e| {
        tracing::warn!(%strategy, error = %e, "failed to measure path");
        RunRecord::failed(strategy, RunStatus::Failed(e.to_string()), visited)
    })
}

/// Run each strategy in turn; one strategy failing never stops the others
#[tracing::instrument(skip(ctx, observer), fields(start = %start, goal = %goal))]
pub fn run_comparison(
    strategies: &[Strategy],
    ctx: &SearchContext<'_>,
    start: VertexId,
    goal: VertexId,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Comparison {
    let mut records = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let observer: Option<&mut dyn SearchObserver> = match observer {
            Some(ref mut o) => Some(&mut **o),
            None => None,
        };
        records.push(run_single(strategy, ctx, start, goal, observer));
    }
    tracing::debug!(
        runs = records.len(),
        successes = records.iter().filter(|r| r.is_success()).count(),
        "comparison_done"
    );

    Comparison::new(start, goal, records)
}
