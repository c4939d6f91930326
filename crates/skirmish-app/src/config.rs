//! Host configuration: which match to run, for how long, and the sim tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::ScenarioId;
use skirmish_sim::{ConfigError, SimConfig};

/// Everything the headless host needs to run one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub scenario: ScenarioId,
    /// Simulation ticks to run before shutting down.
    pub ticks: u64,
    /// Pace ticks in wall-clock time instead of running flat out.
    pub realtime: bool,
    /// Commands queued right after the match starts.
    pub commands: Vec<PlayerCommand>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            scenario: ScenarioId::default(),
            ticks: 60 * 60,
            realtime: false,
            commands: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
