//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, SerialId, Team};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A deployment block was accepted and turned into a unit.
    UnitDeployed {
        team: Team,
        kind: UnitKind,
        id: SerialId,
        position: Position,
    },
    /// A production block was accepted and stays as a structure.
    StructurePlaced {
        team: Team,
        block: BlockKind,
        id: SerialId,
    },
    /// A block was removed because it was placed illegally.
    DeploymentRejected {
        team: Team,
        block: BlockKind,
        /// Tiles to the nearest friendly base, if one exists.
        distance_tiles: Option<f64>,
        refunded: bool,
    },
    /// A unit lost its target because the target became invalid.
    TargetLost { id: SerialId },
    /// A unit was removed from the world.
    UnitDespawned { id: SerialId },
}
