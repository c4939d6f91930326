//! Errors raised while deciding a single unit's tick.
//!
//! None of these escape [`crate::decision::decide`]: each one collapses the
//! unit's decision into the no-target branch for the current tick.

use skirmish_core::enums::UnitKind;
use skirmish_core::types::{SerialId, Team};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DecisionError {
    /// The policy table has no row for this unit kind.
    #[error("no archetype policy registered for {0:?}")]
    MissingPolicy(UnitKind),

    /// The previously selected target is dead, untargetable or gone.
    #[error("target {0:?} is no longer valid")]
    StaleTarget(SerialId),

    /// The selected target sits exactly on top of the unit.
    #[error("unit overlaps target {0:?}")]
    DegenerateGeometry(SerialId),

    /// No enemy base facility exists to fall back to.
    #[error("no enemy base facility for team {0:?}")]
    MissingBase(Team),
}
