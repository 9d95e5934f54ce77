//! Observer wired to the command line: Ctrl-C, `--max-visited` and `--trace`

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::cli::RouteArgs;
use roadsearch_core::graph::VertexId;
use roadsearch_core::search::{SearchObserver, StopFlag};

pub struct CliObserver {
    stop: StopFlag,
    max_visited: Option<usize>,
    trace: bool,
}

impl CliObserver {
    pub fn new(stop: StopFlag, max_visited: Option<usize>, trace: bool) -> Self {
        CliObserver {
            stop,
            max_visited,
            trace,
        }
    }

    /// Observer for a route command; Ctrl-C raises the returned flag
    pub fn for_route(args: &RouteArgs) -> (Self, StopFlag) {
        let stop = StopFlag::new();
        let handler_flag = stop.clone();
        if let Err(e) = ctrlc::set_handler(move || handler_flag.stop()) {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        }
        (
            CliObserver::new(stop.clone(), args.max_visited, args.trace),
            stop,
        )
    }
}

impl SearchObserver for CliObserver {
    fn on_finalize(&mut self, vertex: VertexId, visited: &HashSet<VertexId>) -> ControlFlow<()> {
        if self.trace {
            tracing::info!(%vertex, visited = visited.len(), "finalized");
        }
        if self.stop.is_stopped() {
            return ControlFlow::Break(());
        }
        // the visited set belongs to the current run, so the limit is per run
        match self.max_visited {
            Some(max) if visited.len() >= max => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
