//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Controlled unit type. Each kind has one row in the archetype policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Fast front-line brawler.
    Trihedron,
    /// Slow support craft that spins continuously and keeps its distance.
    Overseer,
    /// Siege unit that razes structures first.
    Disintegrator,
    /// Skirmisher that engages whatever is closest.
    Prism,
    /// Defensive support platform.
    Monolith,
}

impl UnitKind {
    pub const ALL: [UnitKind; 5] = [
        UnitKind::Trihedron,
        UnitKind::Overseer,
        UnitKind::Disintegrator,
        UnitKind::Prism,
        UnitKind::Monolith,
    ];
}

/// Which kind of entity a target candidate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateKind {
    Unit,
    Structure,
}

/// Stationary structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Standard base facility. Generates shards.
    BaseFacility,
    /// Hexa-node base facility. Generates fragments instead of shards.
    HexaNode,
    /// Spire of shards production block.
    Spire,
    /// Generic wall or leftover block.
    Wall,
}

impl StructureKind {
    /// Whether this structure is a team's base facility (stronghold).
    pub fn is_base(self) -> bool {
        matches!(self, StructureKind::BaseFacility | StructureKind::HexaNode)
    }
}

/// Block a player can place. Deployment blocks turn into units on placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    TrihedronDeployment,
    OverseerDeployment,
    DisintegratorDeployment,
    SpireOfShards,
}

/// Stored resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    Shard,
    Fragment,
}

/// Scenario layout used when a match starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Two bases facing each other with a handful of units each.
    #[default]
    Duel,
    /// One defended base surrounded by scattered derelict structures.
    Siege,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    Paused,
}
