//! Error types and exit codes for roadsearch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including a cancelled search)
//! - 2: Usage error (bad flags/args, unknown strategy)
//! - 3: Data error (unknown vertex, malformed graph, missing edge/coordinate)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;
use crate::search::Strategy;

/// Exit codes for the roadsearch binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or running searches
#[derive(Error, Debug)]
pub enum SearchError {
    // Usage errors (exit code 2)
    #[error("unknown algorithm: {0} (expected: BFS, DFS, UCS, A*)")]
    UnknownStrategy(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found in graph: {vertex}")]
    UnknownVertex { vertex: VertexId },

    #[error("no edge from {from} to {to}")]
    MissingEdge { from: VertexId, to: VertexId },

    #[error("no coordinates for vertex {vertex}")]
    MissingCoordinate { vertex: VertexId },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("{strategy} cancelled after {visited} visited nodes")]
    Cancelled { strategy: Strategy, visited: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SearchError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a graph document that failed validation
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SearchError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True when the error is a cooperative cancellation rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SearchError::UnknownStrategy(_)
            | SearchError::UnknownFormat(_)
            | SearchError::UsageError(_)
            | SearchError::InvalidValue { .. } => ExitCode::Usage,

            SearchError::UnknownVertex { .. }
            | SearchError::MissingEdge { .. }
            | SearchError::MissingCoordinate { .. }
            | SearchError::InvalidGraph { .. } => ExitCode::Data,

            SearchError::Cancelled { .. }
            | SearchError::Io(_)
            | SearchError::Json(_)
            | SearchError::Toml(_)
            | SearchError::FailedOperationWithTarget { .. }
            | SearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::UnknownStrategy(_) => "unknown_strategy",
            SearchError::UnknownFormat(_) => "unknown_format",
            SearchError::UsageError(_) => "usage_error",
            SearchError::InvalidValue { .. } => "invalid_value",
            SearchError::UnknownVertex { .. } => "unknown_vertex",
            SearchError::MissingEdge { .. } => "missing_edge",
            SearchError::MissingCoordinate { .. } => "missing_coordinate",
            SearchError::InvalidGraph { .. } => "invalid_graph",
            SearchError::Cancelled { .. } => "cancelled",
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;
