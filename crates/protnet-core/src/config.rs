//! Analysis configuration.
//!
//! Parameters handed to the algorithm collaborators and the renderer,
//! read from a JSON file. Every field has a default so a partial file (or
//! `{}`) is valid.

use crate::error::ConfigError;
use crate::render::RenderEngine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parameters for one analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// PageRank damping factor, in (0, 1).
    pub pagerank_damping: f64,

    /// PageRank convergence tolerance.
    pub pagerank_tolerance: f64,

    /// Resolution passed to community modularization.
    pub community_resolution: f64,

    /// Smallest clique kept by clique aggregation.
    pub clique_min_size: usize,

    /// Layout engine used when the graph is rendered.
    pub render_engine: RenderEngine,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pagerank_damping: 0.85,
            pagerank_tolerance: 1e-6,
            community_resolution: 1.0,
            clique_min_size: 3,
            render_engine: RenderEngine::Dot,
        }
    }
}

impl AnalysisConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pagerank_damping > 0.0 && self.pagerank_damping < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "pagerank_damping",
                reason: format!("{} is not in (0, 1)", self.pagerank_damping),
            });
        }
        if !(self.pagerank_tolerance > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "pagerank_tolerance",
                reason: format!("{} is not positive", self.pagerank_tolerance),
            });
        }
        if !(self.community_resolution > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "community_resolution",
                reason: format!("{} is not positive", self.community_resolution),
            });
        }
        if self.clique_min_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "clique_min_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
