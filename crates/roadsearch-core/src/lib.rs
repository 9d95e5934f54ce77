//! Roadsearch Core Library
//!
//! Graph search strategies (BFS, DFS, UCS, A*) over road networks, plus the
//! harness that runs them side by side and compares the results.

pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;
