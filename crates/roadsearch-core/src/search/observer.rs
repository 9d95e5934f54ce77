//! Per-step observers for live inspection and cooperative cancellation
//!
//! A strategy calls [`SearchObserver::on_finalize`] each time a vertex enters
//! its visited set, before the vertex is expanded. Returning
//! `ControlFlow::Break(())` unwinds the search with
//! [`SearchError::Cancelled`](crate::error::SearchError::Cancelled).

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::Strategy;
use crate::error::{Result, SearchError};
use crate::graph::VertexId;

/// Callback invoked once per finalized vertex
pub trait SearchObserver {
    fn on_finalize(&mut self, vertex: VertexId, visited: &HashSet<VertexId>) -> ControlFlow<()>;
}

impl<F> SearchObserver for F
where
    F: FnMut(VertexId, &HashSet<VertexId>) -> ControlFlow<()>,
{
    fn on_finalize(&mut self, vertex: VertexId, visited: &HashSet<VertexId>) -> ControlFlow<()> {
        self(vertex, visited)
    }
}

/// Invoke the observer, if any, and turn a break into a cancellation error
pub(crate) fn notify(
    observer: &mut Option<&mut dyn SearchObserver>,
    strategy: Strategy,
    vertex: VertexId,
    visited: &HashSet<VertexId>,
) -> Result<()> {
    if let Some(observer) = observer.as_mut() {
        if observer.on_finalize(vertex, visited).is_break() {
            tracing::debug!(%strategy, %vertex, visited = visited.len(), "search_cancelled");
            return Err(SearchError::Cancelled {
                strategy,
                visited: visited.len(),
            });
        }
    }
    Ok(())
}

/// Cancels the search once `limit` vertices have been finalized
#[derive(Debug, Clone)]
pub struct VisitLimit {
    limit: usize,
    seen: usize,
}

impl VisitLimit {
    pub fn new(limit: usize) -> Self {
        VisitLimit { limit, seen: 0 }
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl SearchObserver for VisitLimit {
    fn on_finalize(&mut self, _vertex: VertexId, _visited: &HashSet<VertexId>) -> ControlFlow<()> {
        self.seen += 1;
        if self.seen >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Cancels the search when a shared flag is raised (e.g. from a Ctrl-C handler)
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of any search observing this flag
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the next search can run
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SearchObserver for StopFlag {
    fn on_finalize(&mut self, _vertex: VertexId, _visited: &HashSet<VertexId>) -> ControlFlow<()> {
        if self.is_stopped() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Records the order in which vertices were finalized
#[derive(Debug, Clone, Default)]
pub struct VisitTrace {
    pub order: Vec<VertexId>,
}

impl VisitTrace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for VisitTrace {
    fn on_finalize(&mut self, vertex: VertexId, _visited: &HashSet<VertexId>) -> ControlFlow<()> {
        self.order.push(vertex);
        ControlFlow::Continue(())
    }
}
