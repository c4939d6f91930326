//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems and in the unit AI crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, SerialId, Velocity};

/// Marks a mobile unit and records its type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
}

/// Marks a unit whose movement and weapons are decided by the unit AI each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AiControlled;

/// Liveness flags of a mobile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vitals {
    pub alive: bool,
    /// Untargetable units are never returned by nearest-unit searches.
    pub targetable: bool,
}

/// Approximate hit diameter of a mobile unit (world units).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitSize(pub f64);

/// Movement capability of a mobile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Top speed in world units per second.
    pub speed: f64,
}

/// Facing angle in degrees. Not wrapped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub degrees: f64,
}

/// A single weapon mount. The host reads `shoot` and `aim`, the AI writes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponMount {
    pub shoot: bool,
    pub aim: Option<Position>,
}

/// Weapon envelope of a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapons {
    /// Maximum effective range (world units), measured to the target's surface.
    pub range: f64,
    pub mounts: Vec<WeaponMount>,
}

/// Weak handle to the entity a unit is currently targeting.
/// Only valid within the tick that produced it; revalidated before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub id: SerialId,
    pub kind: CandidateKind,
}

/// The unit's current target, recomputed every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CurrentTarget(pub Option<TargetRef>);

/// Movement request for the motion primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum MoveIntent {
    /// No movement this tick.
    #[default]
    Hold,
    /// Move toward `point` until within `arrival` world units of it.
    MoveTo { point: Position, arrival: f64 },
    /// Apply a raw velocity for one tick.
    Drift { velocity: Velocity },
}

/// The movement intent issued for this tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveOrder(pub MoveIntent);

/// Marks a stationary structure and records its type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
}

/// Footprint size of a structure (tiles per side).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Footprint(pub u32);

/// Item storage of a base facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStorage {
    pub items: BTreeMap<Item, u32>,
}

impl ItemStorage {
    pub fn get(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn add(&mut self, item: Item, amount: u32) {
        let count = self.items.entry(item).or_insert(0);
        *count = count.saturating_add(amount);
    }
}

// Position, Velocity, Team and SerialId are also used directly as components.
