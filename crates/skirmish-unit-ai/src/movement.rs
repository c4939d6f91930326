//! Movement policy: distance bands, no-target fallback and facing.

use glam::DVec2;

use skirmish_core::components::MoveIntent;
use skirmish_core::constants::BASE_ARRIVAL_TOLERANCE;
use skirmish_core::types::{Position, Velocity};

use crate::decision::UnitContext;
use crate::error::DecisionError;
use crate::policy::{ArchetypePolicy, FacingRule, NoTargetRule};
use crate::query::{Candidate, EntityQuery};

/// Movement decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementPlan {
    pub intent: MoveIntent,
    /// New facing angle (degrees).
    pub facing: f64,
}

/// Nearest enemy base facility, the objective when there is no target.
fn fallback_base(unit: &UnitContext, query: &dyn EntityQuery) -> Result<Position, DecisionError> {
    query
        .nearest_enemy_base(unit.position, unit.team)
        .ok_or(DecisionError::MissingBase(unit.team))
}

/// Head straight for the nearest enemy base facing it, or hold when there is
/// none. Used when a unit has no policy row to consult.
pub fn seek_base_plan(unit: &UnitContext, query: &dyn EntityQuery) -> MovementPlan {
    match fallback_base(unit, query) {
        Ok(base) => MovementPlan {
            intent: MoveIntent::MoveTo {
                point: base,
                arrival: BASE_ARRIVAL_TOLERANCE,
            },
            facing: if base == unit.position {
                unit.facing
            } else {
                unit.position.angle_to(&base)
            },
        },
        Err(e) => {
            tracing::trace!(unit = unit.id.0, "{e}; holding");
            MovementPlan {
                intent: MoveIntent::Hold,
                facing: unit.facing,
            }
        }
    }
}

/// Which distance band a unit is in relative to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Pursuit,
    Hold,
    Retreat,
}

/// Classify a distance against `min` and `optimal` thresholds.
pub fn classify(distance: f64, min: f64, optimal: f64) -> Band {
    if distance > optimal {
        Band::Pursuit
    } else if distance < min {
        Band::Retreat
    } else {
        Band::Hold
    }
}

impl ArchetypePolicy {
    /// Plan movement toward (or away from) the selected target, or the fallback
    /// objective when there is none.
    pub fn plan_movement(
        &self,
        unit: &UnitContext,
        target: Option<&Candidate>,
        query: &dyn EntityQuery,
    ) -> MovementPlan {
        let (intent, look_at) = match target {
            Some(t) => (self.banded_intent(unit, t.position), Some(t.position)),
            None => match self.no_target {
                NoTargetRule::Hold => (MoveIntent::Hold, None),
                NoTargetRule::SeekBase | NoTargetRule::OrbitBase => match fallback_base(unit, query) {
                    Ok(base) if self.no_target == NoTargetRule::SeekBase => (
                        MoveIntent::MoveTo {
                            point: base,
                            arrival: BASE_ARRIVAL_TOLERANCE,
                        },
                        Some(base),
                    ),
                    Ok(base) => (self.banded_intent(unit, base), Some(base)),
                    Err(e) => {
                        tracing::trace!(unit = unit.id.0, "{e}; holding");
                        (MoveIntent::Hold, None)
                    }
                },
            },
        };

        let facing = match self.facing {
            FacingRule::Spin { degrees_per_tick } => unit.facing + degrees_per_tick,
            FacingRule::TrackTarget => look_at
                .filter(|p| *p != unit.position)
                .map(|p| unit.position.angle_to(&p))
                .unwrap_or(unit.facing),
        };

        MovementPlan { intent, facing }
    }

    /// Approach, hold or back off relative to `point` according to the bands.
    fn banded_intent(&self, unit: &UnitContext, point: Position) -> MoveIntent {
        let optimal = self.bands.optimal.resolve(unit.weapon_range);
        let min = self.bands.min.resolve(unit.weapon_range);
        let distance = unit.position.range_to(&point);

        match classify(distance, min, optimal) {
            Band::Pursuit => MoveIntent::MoveTo {
                point,
                arrival: optimal,
            },
            Band::Hold => MoveIntent::Hold,
            Band::Retreat => {
                let away = unit.position.as_dvec2() - point.as_dvec2();
                let dir = away.try_normalize().unwrap_or(DVec2::X);
                MoveIntent::Drift {
                    velocity: Velocity::from(dir * unit.speed),
                }
            }
        }
    }
}
