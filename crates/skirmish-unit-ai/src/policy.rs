//! Archetype policy table.
//!
//! Consolidates per-unit-type parameters for target selection, movement and
//! engagement. Adding a unit type means adding a row, not a code path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skirmish_core::enums::UnitKind;

use crate::error::DecisionError;

/// How a unit arbitrates between unit and structure candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityClass {
    /// Nearest unit if any, otherwise nearest structure.
    UnitFirst,
    /// In-range structure, then in-range unit, then whichever is nearer.
    StructureFirst,
    /// Whichever is nearer. Ties go to the unit.
    NearestOfEither,
}

/// Which candidate kinds a unit will consider at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateFilter {
    UnitsOnly,
    StructuresOnly,
    Both,
}

impl CandidateFilter {
    pub fn allows_units(self) -> bool {
        matches!(self, CandidateFilter::UnitsOnly | CandidateFilter::Both)
    }

    pub fn allows_structures(self) -> bool {
        matches!(self, CandidateFilter::StructuresOnly | CandidateFilter::Both)
    }
}

/// A band threshold, either absolute or relative to the unit's weapon range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BandDistance {
    /// World units.
    World(f64),
    /// Fraction of the unit's weapon range.
    RangeFactor(f64),
}

impl BandDistance {
    pub fn resolve(self, weapon_range: f64) -> f64 {
        match self {
            BandDistance::World(d) => d,
            BandDistance::RangeFactor(f) => f * weapon_range,
        }
    }
}

/// Desired-distance bands. Farther than `optimal` pursues, closer than `min`
/// retreats, in between holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceBands {
    pub optimal: BandDistance,
    pub min: BandDistance,
}

/// How a unit orients itself each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FacingRule {
    /// Face the selected target (or the fallback objective).
    TrackTarget,
    /// Advance facing by a fixed increment every tick, ignoring targets.
    Spin { degrees_per_tick: f64 },
}

/// What a unit does when no candidate is eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoTargetRule {
    /// Move straight onto the nearest enemy base facility.
    SeekBase,
    /// Apply the distance bands to the nearest enemy base facility.
    OrbitBase,
    /// Stay put.
    Hold,
}

/// Behavioral policy for one unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypePolicy {
    pub priority: PriorityClass,
    pub filter: CandidateFilter,
    pub bands: DistanceBands,
    pub facing: FacingRule,
    pub no_target: NoTargetRule,
}

/// Get the built-in policy for a given unit kind.
pub fn get_policy(kind: UnitKind) -> ArchetypePolicy {
    use skirmish_core::constants::*;

    match kind {
        UnitKind::Trihedron => ArchetypePolicy {
            priority: PriorityClass::UnitFirst,
            filter: CandidateFilter::Both,
            bands: DistanceBands {
                optimal: BandDistance::RangeFactor(0.8),
                min: BandDistance::World(0.0),
            },
            facing: FacingRule::TrackTarget,
            no_target: NoTargetRule::SeekBase,
        },
        UnitKind::Overseer => ArchetypePolicy {
            priority: PriorityClass::UnitFirst,
            filter: CandidateFilter::UnitsOnly,
            bands: DistanceBands {
                optimal: BandDistance::World(OVERSEER_OPTIMAL_RANGE),
                min: BandDistance::World(OVERSEER_MIN_RANGE),
            },
            facing: FacingRule::Spin {
                degrees_per_tick: OVERSEER_SPIN_PER_TICK,
            },
            no_target: NoTargetRule::OrbitBase,
        },
        UnitKind::Disintegrator => ArchetypePolicy {
            priority: PriorityClass::StructureFirst,
            filter: CandidateFilter::Both,
            bands: DistanceBands {
                optimal: BandDistance::RangeFactor(0.8),
                min: BandDistance::World(0.0),
            },
            facing: FacingRule::TrackTarget,
            no_target: NoTargetRule::SeekBase,
        },
        UnitKind::Prism => ArchetypePolicy {
            priority: PriorityClass::NearestOfEither,
            filter: CandidateFilter::Both,
            bands: DistanceBands {
                optimal: BandDistance::RangeFactor(0.9),
                min: BandDistance::RangeFactor(0.5),
            },
            facing: FacingRule::TrackTarget,
            no_target: NoTargetRule::SeekBase,
        },
        UnitKind::Monolith => ArchetypePolicy {
            priority: PriorityClass::NearestOfEither,
            filter: CandidateFilter::Both,
            bands: DistanceBands {
                optimal: BandDistance::RangeFactor(1.0),
                min: BandDistance::RangeFactor(0.6),
            },
            facing: FacingRule::TrackTarget,
            no_target: NoTargetRule::Hold,
        },
    }
}

/// Policy rows keyed by unit kind. Serializes as a JSON object keyed by kind name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    rows: BTreeMap<UnitKind, ArchetypePolicy>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            rows: UnitKind::ALL
                .iter()
                .map(|&kind| (kind, get_policy(kind)))
                .collect(),
        }
    }
}

impl PolicyTable {
    /// A table with no rows.
    pub fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    pub fn get(&self, kind: UnitKind) -> Result<&ArchetypePolicy, DecisionError> {
        self.rows
            .get(&kind)
            .ok_or(DecisionError::MissingPolicy(kind))
    }

    /// Insert or replace a row.
    pub fn insert(&mut self, kind: UnitKind, policy: ArchetypePolicy) {
        self.rows.insert(kind, policy);
    }

    pub fn remove(&mut self, kind: UnitKind) -> Option<ArchetypePolicy> {
        self.rows.remove(&kind)
    }

    /// Overwrite rows with every row present in `overrides`.
    pub fn merge(&mut self, overrides: PolicyTable) {
        self.rows.extend(overrides.rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
