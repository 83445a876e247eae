//! Engine configuration.
//!
//! Built once at startup and handed down by value; nothing here is global.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{error::CheckersError, time_control::SearchLimits};

pub const DEFAULT_TIME_BUDGET_MS: u64 = 990;
pub const DEFAULT_MAX_DEPTH: u16 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wall-clock budget for one move, in milliseconds
    pub time_budget_ms: u64,
    /// Iterative deepening ceiling (exclusive); a safety rail only
    pub max_depth: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CheckersError> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| CheckersError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckersError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), CheckersError> {
        if self.max_depth == 0 {
            return Err(CheckersError::config("max_depth must be at least 1"));
        }
        Ok(())
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits::depth_and_time(self.max_depth, self.time_budget())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
