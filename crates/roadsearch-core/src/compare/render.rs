//! Text renderings of a [`Comparison`]

use std::fmt::Write;

use super::{Comparison, ComparisonSummary, RunRecord};
use crate::format::join_path;

const RULE_WIDTH: usize = 80;

/// Aligned table, successes first, followed by a summary block when more
/// than one strategy ran
pub fn render_human(comparison: &Comparison) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<10} {:<12} {:<10} {:<10} {:<15} {}",
        "Algorithm", "Time (ms)", "Visited", "Path", "Distance (km)", "Status"
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for record in comparison.sorted_records() {
        let _ = writeln!(out, "{}", human_row(record));
    }

    if comparison.records.len() > 1 {
        out.push('\n');
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        out.push_str("Comparison summary\n");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        out.push_str(&human_summary(&comparison.summary));
    }

    out
}

fn human_row(record: &RunRecord) -> String {
    let na = || "N/A".to_string();
    let time = record
        .elapsed_ms
        .map_or_else(na, |ms| format!("{:.2}", ms));
    let (path, distance) = if record.is_success() {
        (
            record.path_nodes.to_string(),
            record
                .distance_m
                .map_or_else(na, |m| format!("{:.2}", m / 1000.0)),
        )
    } else {
        (na(), na())
    };

    format!(
        "{:<10} {:<12} {:<10} {:<10} {:<15} {}",
        record.strategy.name(),
        time,
        record.visited,
        path,
        distance,
        record.status.label()
    )
}

fn human_summary(summary: &ComparisonSummary) -> String {
    let (Some(fastest), Some(shortest), Some(fewest), Some(ratio)) = (
        summary.fastest,
        summary.shortest,
        summary.fewest_visited,
        summary.best_ratio,
    ) else {
        return "No strategy found a path\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fastest:        {:<8} ({:.2} ms)",
        fastest.strategy.name(),
        fastest.value
    );
    let _ = writeln!(
        out,
        "Shortest path:  {:<8} ({:.2} km)",
        shortest.strategy.name(),
        shortest.value / 1000.0
    );
    let _ = writeln!(
        out,
        "Fewest visited: {:<8} ({} nodes)",
        fewest.strategy.name(),
        fewest.value
    );
    let _ = writeln!(
        out,
        "Best ratio:     {:<8} ({:.3})",
        ratio.strategy.name(),
        ratio.value
    );
    out
}

/// Line-oriented output: one `H` header, one `R` line per run in run order,
/// and an `S` summary line when more than one strategy ran
pub fn render_records(comparison: &Comparison, mode: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "H roadsearch=1 records=1 mode={} start={} goal={} runs={}",
        mode,
        comparison.start,
        comparison.goal,
        comparison.records.len()
    );

    for record in &comparison.records {
        let _ = writeln!(out, "{}", record_line(record));
    }

    if comparison.records.len() > 1 {
        let _ = writeln!(out, "{}", summary_line(&comparison.summary));
    }

    out
}

fn record_line(record: &RunRecord) -> String {
    let mut line = format!("R strategy={}", record.strategy.name());
    match &record.status {
        super::RunStatus::Found => line.push_str(" status=found"),
        super::RunStatus::NoPath => line.push_str(" status=no_path"),
        super::RunStatus::Cancelled => line.push_str(" status=cancelled"),
        super::RunStatus::Failed(reason) => {
            let _ = write!(line, " status=failed reason=\"{}\"", escape_quotes(reason));
        }
    }
    if let Some(ms) = record.elapsed_ms {
        let _ = write!(line, " elapsed_ms={:.3}", ms);
    }
    let _ = write!(line, " visited={}", record.visited);
    if record.is_success() {
        let _ = write!(line, " path_nodes={}", record.path_nodes);
        if let Some(distance) = record.distance_m {
            let _ = write!(line, " distance_m={:.3}", distance);
        }
        let _ = write!(line, " path={}", join_path(&record.path));
    }
    line
}

fn summary_line(summary: &ComparisonSummary) -> String {
    if summary.is_empty() {
        return "S found=0".to_string();
    }

    let mut line = String::from("S");
    let titles = [
        ("fastest", summary.fastest),
        ("shortest", summary.shortest),
        ("fewest_visited", summary.fewest_visited),
        ("best_ratio", summary.best_ratio),
    ];
    for (title, leader) in titles {
        if let Some(leader) = leader {
            let _ = write!(line, " {}={}:{}", title, leader.strategy.name(), leader.value);
        }
    }
    line
}

/// Escape double quotes so a value can sit inside a quoted field
fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

#[cfg(test)]
mod tests {
    use super::super::{run_comparison, RunStatus};
    use super::*;
    use crate::graph::VertexId;
    use crate::search::fixtures::*;
    use crate::search::{SearchContext, Strategy};

    fn comparison(strategies: &[Strategy], goal: VertexId) -> Comparison {
        let graph = diamond();
        let ctx = SearchContext::new(&graph, &graph);
        run_comparison(strategies, &ctx, A, goal, None)
    }

    #[test]
    fn test_human_single_run_has_no_summary() {
        let out = render_human(&comparison(&[Strategy::Ucs], D));
        assert!(out.starts_with("Algorithm"));
        assert!(out.contains("UCS"));
        assert!(out.contains("found"));
        assert!(!out.contains("Comparison summary"));
    }

    #[test]
    fn test_human_summary_for_several_runs() {
        let out = render_human(&comparison(&Strategy::ALL, D));
        assert!(out.contains("Comparison summary"));
        assert!(out.contains("Shortest path:  UCS"));
        assert!(out.contains("Fewest visited: DFS"));
    }

    #[test]
    fn test_human_failures_show_na() {
        let out = render_human(&comparison(&Strategy::ALL, F));
        let bfs_row = out.lines().find(|l| l.starts_with("BFS")).unwrap();
        assert!(bfs_row.contains("N/A"));
        assert!(bfs_row.ends_with("no path"));
        assert!(out.contains("No strategy found a path"));
    }

    #[test]
    fn test_human_failures_sorted_last() {
        let mut cmp = comparison(&[Strategy::Bfs, Strategy::Ucs], D);
        cmp.records[0].status = RunStatus::Cancelled;
        cmp.records[0].elapsed_ms = None;
        let out = render_human(&cmp);
        let rows: Vec<&str> = out.lines().skip(2).take(2).collect();
        assert!(rows[0].starts_with("UCS"));
        assert!(rows[1].starts_with("BFS"));
    }

    #[test]
    fn test_records_lines() {
        let out = render_records(&comparison(&[Strategy::Bfs, Strategy::Ucs], D), "compare");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "H roadsearch=1 records=1 mode=compare start=1 goal=4 runs=2"
        );
        assert!(lines[1].starts_with("R strategy=BFS status=found"));
        assert!(lines[1].ends_with("path=1,2,4"));
        assert!(lines[2].contains("distance_m=3.000"));
        assert!(lines[3].starts_with("S fastest="));
        assert!(lines[3].contains("shortest=UCS:3"));
    }

    #[test]
    fn test_records_failed_reason_is_quoted() {
        let mut cmp = comparison(&[Strategy::AStar], D);
        cmp.records[0].status = RunStatus::Failed("bad \"edge\"".to_string());
        let out = render_records(&cmp, "search");
        assert!(out.contains(r#"status=failed reason="bad \"edge\"""#));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_records_no_success_summary() {
        let out = render_records(&comparison(&Strategy::ALL, F), "compare");
        assert!(out.contains("R strategy=DFS status=no_path"));
        assert!(out.trim_end().ends_with("S found=0"));
    }
}
