//! Engine configuration file support.
//!
//! This module provides utilities for reading engine configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

/// Bounds on one generation call's combinatorial search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Maximum section placement attempts before the search is cut off.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    /// Maximum number of schedules retained in one result set.
    #[serde(default = "default_max_schedules")]
    pub max_schedules: usize,
}

fn default_max_iterations() -> u64 {
    5_000_000
}

fn default_max_schedules() -> usize {
    100_000
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            max_schedules: default_max_schedules(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(EngineError::Configuration)` if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path).map_err(|e| {
            EngineError::Configuration(format!(
                "cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse engine configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        toml::from_str(text)
            .map_err(|e| EngineError::Configuration(format!("invalid config: {}", e)))
    }
}
