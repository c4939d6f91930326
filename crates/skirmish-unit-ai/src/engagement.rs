//! Engagement gate: enables weapons only when the target's surface is in range.

use skirmish_core::components::WeaponMount;
use skirmish_core::types::Position;

use crate::decision::UnitContext;
use crate::policy::ArchetypePolicy;
use crate::query::Candidate;
use crate::selector::in_weapon_range;

/// Firing decision for one tick, applied to every mount alike.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngagementPlan {
    pub shoot: bool,
    pub aim: Option<Position>,
}

impl EngagementPlan {
    /// Weapons down, aim cleared.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Write this plan into every weapon mount.
    pub fn apply(&self, mounts: &mut [WeaponMount]) {
        for mount in mounts {
            mount.shoot = self.shoot;
            mount.aim = self.aim;
        }
    }
}

impl ArchetypePolicy {
    /// Decide whether to fire at the selected target this tick.
    pub fn plan_engagement(&self, unit: &UnitContext, target: Option<&Candidate>) -> EngagementPlan {
        match target {
            Some(t) if in_weapon_range(unit, t) => EngagementPlan {
                shoot: true,
                aim: Some(t.position),
            },
            _ => EngagementPlan::disabled(),
        }
    }
}
