use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small road network, ids 1-4 connected and 5 isolated.
///
/// Shortest route 1 -> 4 is 1,2,3,4 (333 m); BFS takes 1,2,4 and DFS 1,3,4.
pub const ROAD_GRAPH: &str = r#"{
  "nodes": [
    {"id": 1, "y": 0.000, "x": 0.000},
    {"id": 2, "y": 0.000, "x": 0.001},
    {"id": 3, "y": 0.001, "x": 0.001},
    {"id": 4, "y": 0.001, "x": 0.002},
    {"id": 5, "y": 0.010, "x": 0.010}
  ],
  "edges": [
    {"from": 1, "to": 2, "length": 111.0},
    {"from": 2, "to": 3, "length": 111.0, "geometry": [[0.001, 0.0], [0.0012, 0.0005], [0.001, 0.001]]},
    {"from": 1, "to": 3, "length": 400.0},
    {"from": 3, "to": 4, "length": 111.0},
    {"from": 2, "to": 4, "length": 500.0}
  ]
}"#;

/// A temp directory holding a graph file and an empty config directory
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_graph(ROAD_GRAPH)
    }

    pub fn with_graph(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("graph.json"), content).unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        Fixture { dir }
    }

    pub fn graph(&self) -> PathBuf {
        self.dir.path().join("graph.json")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("config").join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// roadsearch isolated from the user's config
    pub fn cmd(&self) -> Command {
        roadsearch_in(&self.dir.path().join("config"))
    }
}

pub fn roadsearch_in(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("roadsearch");
    cmd.env("ROADSEARCH_CONFIG_DIR", config_dir)
        .env_remove("ROADSEARCH_CONFIG")
        .env_remove("ROADSEARCH_LOG");
    cmd
}
