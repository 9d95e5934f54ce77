//! Strategy properties checked on seeded random road graphs against
//! brute-force oracles.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use roadsearch_core::compare::{run_comparison, RunStatus};
use roadsearch_core::error::SearchError;
use roadsearch_core::graph::{path_length, Coord, GraphProvider, RoadEdge, RoadGraph, VertexId};
use roadsearch_core::search::{
    run_strategy, Heuristic, SearchContext, SearchResult, StopFlag, Strategy, VisitLimit,
};

const SEEDS: std::ops::Range<u64> = 0..25;

struct Sample {
    graph: RoadGraph,
    edges: Vec<(VertexId, VertexId, f64)>,
}

/// Random directed graph whose edge lengths never undercut the straight-line
/// estimate, so A* with the default heuristic stays admissible.
fn random_graph(seed: u64, nodes: i64, edges: usize) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();
    let mut coords = HashMap::new();

    for id in 1..=nodes {
        let coord = Coord::new(rng.gen_range(0.0..0.05), rng.gen_range(0.0..0.05));
        coords.insert(id, coord);
        graph.add_node(VertexId(id), coord);
    }

    let estimate = Heuristic::default();
    let mut list = Vec::new();
    for _ in 0..edges {
        let from = rng.gen_range(1..=nodes);
        let to = rng.gen_range(1..=nodes);
        if from == to {
            continue;
        }
        let straight = estimate.estimate(coords[&from], coords[&to]);
        let length = straight * rng.gen_range(1.0..2.0);
        graph
            .add_edge(VertexId(from), VertexId(to), RoadEdge::with_length(length))
            .unwrap();
        list.push((VertexId(from), VertexId(to), length));
    }

    Sample { graph, edges: list }
}

/// Hop distance by repeated relaxation over the raw edge list
fn oracle_hops(sample: &Sample, start: VertexId, goal: VertexId) -> Option<usize> {
    let mut hops = HashMap::from([(start, 0usize)]);
    for _ in 0..sample.graph.node_count() {
        for &(from, to, _) in &sample.edges {
            if let Some(&h) = hops.get(&from) {
                if hops.get(&to).map_or(true, |&known| h + 1 < known) {
                    hops.insert(to, h + 1);
                }
            }
        }
    }
    hops.get(&goal).copied()
}

/// Bellman-Ford weighted distance over the first parallel edge of each hop
fn oracle_cost(sample: &Sample, start: VertexId, goal: VertexId) -> Option<f64> {
    let mut dist = HashMap::from([(start, 0.0f64)]);
    for _ in 0..sample.graph.node_count() {
        for &(from, to, _) in &sample.edges {
            let weight = sample.graph.edge_weight(from, to).unwrap();
            if let Some(&d) = dist.get(&from) {
                if dist.get(&to).map_or(true, |&known| d + weight < known) {
                    dist.insert(to, d + weight);
                }
            }
        }
    }
    dist.get(&goal).copied()
}

fn reachable(graph: &RoadGraph, start: VertexId) -> HashSet<VertexId> {
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(v) = stack.pop() {
        for n in graph.neighbors(v) {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    seen
}

fn run(strategy: Strategy, graph: &RoadGraph, start: VertexId, goal: VertexId) -> SearchResult {
    let ctx = SearchContext::new(graph, graph);
    run_strategy(strategy, &ctx, start, goal, None).unwrap()
}

fn assert_valid_path(graph: &RoadGraph, result: &SearchResult, start: VertexId, goal: VertexId) {
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&goal));
    let distinct: HashSet<_> = result.path.iter().collect();
    assert_eq!(distinct.len(), result.path.len(), "path repeats a vertex");
    for pair in result.path.windows(2) {
        assert!(
            graph.edge_weight(pair[0], pair[1]).is_some(),
            "no edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn bfs_matches_hop_oracle() {
    for seed in SEEDS {
        let sample = random_graph(seed, 30, 70);
        let (start, goal) = (VertexId(1), VertexId(30));
        let result = run(Strategy::Bfs, &sample.graph, start, goal);

        match oracle_hops(&sample, start, goal) {
            Some(hops) => {
                assert_valid_path(&sample.graph, &result, start, goal);
                assert_eq!(result.hops(), hops, "seed {seed}");
            }
            None => assert!(result.path.is_empty(), "seed {seed}"),
        }
    }
}

#[test]
fn weighted_strategies_match_cost_oracle() {
    for seed in SEEDS {
        let sample = random_graph(seed, 30, 70);
        let (start, goal) = (VertexId(2), VertexId(29));
        let expected = oracle_cost(&sample, start, goal);

        for strategy in [Strategy::Ucs, Strategy::AStar] {
            let result = run(strategy, &sample.graph, start, goal);
            match expected {
                Some(cost) => {
                    assert_valid_path(&sample.graph, &result, start, goal);
                    let found = path_length(&sample.graph, &result.path).unwrap();
                    assert!((found - cost).abs() < 1e-6, "{strategy} seed {seed}");
                }
                None => assert!(result.path.is_empty(), "{strategy} seed {seed}"),
            }
        }
    }
}

#[test]
fn ucs_never_longer_than_other_strategies() {
    for seed in SEEDS {
        let sample = random_graph(seed, 25, 60);
        let (start, goal) = (VertexId(1), VertexId(25));
        let ucs = run(Strategy::Ucs, &sample.graph, start, goal);
        if ucs.path.is_empty() {
            continue;
        }
        let best = path_length(&sample.graph, &ucs.path).unwrap();

        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let other = run(strategy, &sample.graph, start, goal);
            assert_valid_path(&sample.graph, &other, start, goal);
            let length = path_length(&sample.graph, &other.path).unwrap();
            assert!(best <= length + 1e-9, "{strategy} seed {seed}");
        }
    }
}

#[test]
fn astar_never_visits_more_than_ucs_with_admissible_heuristic() {
    for seed in SEEDS {
        let sample = random_graph(seed, 40, 120);
        let (start, goal) = (VertexId(3), VertexId(38));
        let ucs = run(Strategy::Ucs, &sample.graph, start, goal);
        let astar = run(Strategy::AStar, &sample.graph, start, goal);
        if !ucs.path.is_empty() {
            assert!(astar.visited <= ucs.visited, "seed {seed}");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let sample = random_graph(7, 40, 100);
    for strategy in Strategy::ALL {
        let first = run(strategy, &sample.graph, VertexId(1), VertexId(40));
        let second = run(strategy, &sample.graph, VertexId(1), VertexId(40));
        assert_eq!(first, second, "{strategy}");
    }
}

#[test]
fn unreachable_goal_visits_whole_component() {
    for seed in SEEDS {
        let mut sample = random_graph(seed, 20, 40);
        let island = VertexId(100);
        sample.graph.add_node(island, Coord::new(0.1, 0.1));
        let expected = reachable(&sample.graph, VertexId(1)).len();

        for strategy in Strategy::ALL {
            let result = run(strategy, &sample.graph, VertexId(1), island);
            assert!(result.path.is_empty(), "{strategy} seed {seed}");
            assert_eq!(result.visited, expected, "{strategy} seed {seed}");
        }
    }
}

#[test]
fn start_equals_goal_is_a_single_vertex_path() {
    let sample = random_graph(3, 10, 20);
    for strategy in Strategy::ALL {
        let result = run(strategy, &sample.graph, VertexId(4), VertexId(4));
        assert_eq!(result.path, vec![VertexId(4)], "{strategy}");
    }
}

#[test]
fn visit_limit_cancels_every_strategy() {
    let mut sample = random_graph(11, 30, 90);
    let start = VertexId(1);
    if reachable(&sample.graph, start).len() < 4 {
        return;
    }
    // unreachable goal, so only the limit can end the search early
    let island = VertexId(999);
    sample.graph.add_node(island, Coord::new(1.0, 1.0));
    let ctx = SearchContext::new(&sample.graph, &sample.graph);

    for strategy in Strategy::ALL {
        let mut limit = VisitLimit::new(3);
        let err = run_strategy(strategy, &ctx, start, island, Some(&mut limit)).unwrap_err();
        assert!(err.is_cancelled(), "{strategy}");
        assert!(matches!(err, SearchError::Cancelled { strategy: s, .. } if s == strategy));
        assert_eq!(limit.seen(), 3);
    }
}

#[test]
fn unknown_goal_fails_before_observer_runs() {
    let sample = random_graph(11, 10, 20);
    let ctx = SearchContext::new(&sample.graph, &sample.graph);
    let mut limit = VisitLimit::new(1);
    let err = run_strategy(Strategy::Bfs, &ctx, VertexId(1), VertexId(999), Some(&mut limit));
    assert!(matches!(err, Err(SearchError::UnknownVertex { vertex }) if vertex == VertexId(999)));
    assert_eq!(limit.seen(), 0);
}

#[test]
fn comparison_over_random_graph() {
    let sample = random_graph(5, 30, 90);
    let ctx = SearchContext::new(&sample.graph, &sample.graph);
    let (start, goal) = (VertexId(1), VertexId(30));
    let cmp = run_comparison(&Strategy::ALL, &ctx, start, goal, None);

    assert_eq!(cmp.records.len(), 4);
    match oracle_cost(&sample, start, goal) {
        Some(cost) => {
            assert!(cmp.records.iter().all(|r| r.status == RunStatus::Found));
            let shortest = cmp.summary.shortest.unwrap();
            assert!((shortest.value - cost).abs() < 1e-6);
            assert!(matches!(shortest.strategy, Strategy::Ucs | Strategy::AStar));
        }
        None => {
            assert!(cmp.records.iter().all(|r| r.status == RunStatus::NoPath));
            assert!(cmp.summary.is_empty());
        }
    }
}

#[test]
fn stop_flag_raised_mid_search() {
    let mut sample = random_graph(9, 30, 90);
    let island = VertexId(999);
    sample.graph.add_node(island, Coord::new(1.0, 1.0));
    let ctx = SearchContext::new(&sample.graph, &sample.graph);

    let flag = StopFlag::new();
    let raiser = flag.clone();
    let mut count = 0;
    let mut observer = move |_: VertexId, _: &HashSet<VertexId>| {
        count += 1;
        if count == 2 {
            raiser.stop();
        }
        std::ops::ControlFlow::<()>::Continue(())
    };
    let result = run_strategy(Strategy::Bfs, &ctx, VertexId(1), island, Some(&mut observer));
    assert!(result.is_ok());
    assert!(flag.is_stopped());

    // a raised flag stops the next search at its first vertex
    let mut stop = flag.clone();
    let err = run_strategy(Strategy::Ucs, &ctx, VertexId(1), island, Some(&mut stop)).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Cancelled {
            strategy: Strategy::Ucs,
            visited: 1
        }
    ));

    flag.reset();
    assert!(run_strategy(Strategy::Ucs, &ctx, VertexId(1), island, Some(&mut stop)).is_ok());
}
