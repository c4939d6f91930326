//! Per-unit, per-tick decision.
//!
//! Pure function from a unit's state and a world view to a target, a movement
//! intent and a weapon plan. No ECS dependency and no memory between ticks
//! beyond the target handle the caller passes back in.

use skirmish_core::components::TargetRef;
use skirmish_core::constants::DEGENERATE_DISTANCE;
use skirmish_core::enums::UnitKind;
use skirmish_core::types::{Position, SerialId, Team};

use crate::engagement::EngagementPlan;
use crate::error::DecisionError;
use crate::movement::{self, MovementPlan};
use crate::policy::{ArchetypePolicy, PolicyTable};
use crate::query::{Candidate, EntityQuery};

/// Input to the decision for a single controlled unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext {
    pub id: SerialId,
    pub kind: UnitKind,
    pub team: Team,
    pub position: Position,
    /// World units per second.
    pub speed: f64,
    /// Facing angle (degrees).
    pub facing: f64,
    /// Maximum weapon range (world units, to the target's surface).
    pub weapon_range: f64,
    /// Target carried over from the previous tick, if any.
    pub current_target: Option<TargetRef>,
}

/// Output of the decision for one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// New value of the unit's current target.
    pub target: Option<TargetRef>,
    pub movement: MovementPlan,
    pub engagement: EngagementPlan,
    /// Set when last tick's target failed revalidation.
    pub lost_target: Option<SerialId>,
}

/// Check that last tick's target is still usable.
pub fn revalidate(unit: &UnitContext, query: &dyn EntityQuery) -> Result<Option<Candidate>, DecisionError> {
    match unit.current_target {
        None => Ok(None),
        Some(target) => query
            .revalidate(target, unit.team)
            .map(Some)
            .ok_or(DecisionError::StaleTarget(target.id)),
    }
}

/// Select a fresh target, rejecting one the unit is sitting on.
fn select_checked(
    unit: &UnitContext,
    policy: &ArchetypePolicy,
    query: &dyn EntityQuery,
) -> Result<Option<Candidate>, DecisionError> {
    match policy.select_target(unit, query) {
        Some(t) if t.distance_from(&unit.position) <= DEGENERATE_DISTANCE => {
            Err(DecisionError::DegenerateGeometry(t.id))
        }
        selected => Ok(selected),
    }
}

/// Run target selection, movement and engagement for one unit.
///
/// Movement and engagement always consume the same freshly selected target.
/// Any error degrades to the no-target branch for this tick only.
pub fn decide(unit: &UnitContext, policies: &PolicyTable, query: &dyn EntityQuery) -> Decision {
    let lost_target = match revalidate(unit, query) {
        Ok(_) => None,
        Err(DecisionError::StaleTarget(id)) => {
            tracing::debug!(unit = unit.id.0, target = id.0, "target lost");
            Some(id)
        }
        Err(_) => None,
    };

    let policy = match policies.get(unit.kind) {
        Ok(policy) => policy,
        Err(e) => {
            tracing::warn!(unit = unit.id.0, "{e}");
            return Decision {
                target: None,
                movement: movement::seek_base_plan(unit, query),
                engagement: EngagementPlan::disabled(),
                lost_target,
            };
        }
    };

    let target = match select_checked(unit, policy, query) {
        Ok(target) => target,
        Err(e) => {
            tracing::debug!(unit = unit.id.0, "{e}; treating as no target");
            None
        }
    };

    Decision {
        target: target.map(|t| t.target_ref()),
        movement: policy.plan_movement(unit, target.as_ref(), query),
        engagement: policy.plan_engagement(unit, target.as_ref()),
        lost_target,
    }
}
