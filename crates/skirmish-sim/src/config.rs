//! Simulation configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skirmish_core::constants::*;
use skirmish_unit_ai::PolicyTable;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Rows replacing the built-in archetype policies.
    pub policy_overrides: PolicyTable,
    pub economy: EconomyConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            policy_overrides: PolicyTable::empty(),
            economy: EconomyConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Built-in policy table with the configured overrides applied.
    pub fn policies(&self) -> PolicyTable {
        let mut table = PolicyTable::default();
        table.merge(self.policy_overrides.clone());
        table
    }
}

/// Passive generation and income-rate tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub shard_interval_ticks: u64,
    pub fragment_interval_ticks: u64,
    pub sample_interval_secs: f64,
    pub window_secs: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            shard_interval_ticks: SHARD_INTERVAL_TICKS,
            fragment_interval_ticks: FRAGMENT_INTERVAL_TICKS,
            sample_interval_secs: RATE_SAMPLE_INTERVAL_SECS,
            window_secs: RATE_WINDOW_SECS,
        }
    }
}
