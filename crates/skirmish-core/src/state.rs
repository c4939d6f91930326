//! Match snapshot: the complete visible state published after each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::{MoveIntent, TargetRef, WeaponMount};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SerialId, SimTime, Team};

/// Complete match state after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub scenario: Option<ScenarioId>,
    /// Live units, sorted by id.
    pub units: Vec<UnitView>,
    /// Structures, sorted by id.
    pub structures: Vec<StructureView>,
    /// Per-team stock and income rate, sorted by team.
    pub economy: Vec<TeamEconomyView>,
    pub events: Vec<SimEvent>,
}

/// A mobile unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: SerialId,
    pub kind: UnitKind,
    pub team: Team,
    pub position: Position,
    /// Facing angle (degrees).
    pub facing: f64,
    pub alive: bool,
    pub targetable: bool,
    pub target: Option<TargetRef>,
    pub intent: MoveIntent,
    pub mounts: Vec<WeaponMount>,
}

/// A stationary structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureView {
    pub id: SerialId,
    pub kind: StructureKind,
    pub team: Team,
    pub position: Position,
    /// Footprint (tiles per side).
    pub size: u32,
}

/// Economy status for one team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamEconomyView {
    pub team: Team,
    /// Total stock across all of the team's base facilities.
    pub stock: BTreeMap<Item, u32>,
    /// Estimated income per second, measured at the team's primary base.
    pub rates: BTreeMap<Item, f64>,
}
