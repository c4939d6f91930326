//! Commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, SerialId, Team};

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match control ---
    /// Start a match with the given scenario layout.
    StartMatch { scenario: ScenarioId },
    /// Clear the world and economy state, then start the same scenario again.
    RestartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },

    // --- Construction ---
    /// Place a block. Deployment blocks become units if close enough to a base.
    PlaceBlock {
        team: Team,
        block: BlockKind,
        position: Position,
    },

    // --- Direct entity control (debug / scripting) ---
    /// Spawn a unit directly, bypassing deployment rules.
    SpawnUnit {
        team: Team,
        kind: UnitKind,
        position: Position,
    },
    /// Mark a unit as dead. It is despawned by cleanup at the end of the tick.
    KillUnit { id: SerialId },
    /// Toggle whether a unit can be targeted.
    SetTargetable { id: SerialId, targetable: bool },
}
