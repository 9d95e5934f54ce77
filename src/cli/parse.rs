use roadsearch_core::format::OutputFormat;
use roadsearch_core::graph::VertexId;
use roadsearch_core::search::{HeuristicKind, Strategy};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse strategy name from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse heuristic kind from string
pub fn parse_heuristic(s: &str) -> std::result::Result<HeuristicKind, String> {
    s.parse::<HeuristicKind>()
}

/// Parse vertex id from string
pub fn parse_vertex(s: &str) -> std::result::Result<VertexId, String> {
    s.parse::<VertexId>()
}

/// Parse a count that must be at least 1
pub fn parse_positive_count(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid count: {}", s)),
    }
}
