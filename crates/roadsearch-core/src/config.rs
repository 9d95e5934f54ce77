//! Configuration for roadsearch
//!
//! Stored as TOML in `~/.config/roadsearch/config.toml` unless overridden by
//! `ROADSEARCH_CONFIG_DIR` or an explicit path.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};
use crate::search::Heuristic;

pub use types::{AstarConfig, CompareConfig, SearchConfig, CONFIG_FORMAT_VERSION};

const CONFIG_DIR: &str = "roadsearch";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROADSEARCH_CONFIG_DIR";

impl SearchConfig {
    /// Heuristic A* should use
    pub fn heuristic(&self) -> Heuristic {
        Heuristic::from_kind(self.astar.heuristic, self.astar.meters_per_degree)
    }

    /// Reject values no search could use
    pub fn validate(&self) -> Result<()> {
        let scale = self.astar.meters_per_degree;
        if !scale.is_finite() || scale <= 0.0 {
            crate::bail_invalid!("astar.meters_per_degree", scale);
        }
        if self.compare.strategies.is_empty() {
            crate::bail_invalid!("compare.strategies", "[] (at least one strategy required)");
        }
        Ok(())
    }

    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SearchError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SearchError::io_operation("read config", path.display(), e))?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or the default one when it exists.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SearchError::io_operation("create directory", parent.display(), e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| SearchError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| SearchError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
