//! Target selection: applies an archetype's priority rules to the query results.

use crate::decision::UnitContext;
use crate::policy::{ArchetypePolicy, PriorityClass};
use crate::query::{Candidate, EntityQuery};

impl ArchetypePolicy {
    /// Pick the single authoritative target for this tick, or none.
    pub fn select_target(&self, unit: &UnitContext, query: &dyn EntityQuery) -> Option<Candidate> {
        let nearest_unit = || {
            if self.filter.allows_units() {
                query.nearest_unit(unit.position, unit.team)
            } else {
                None
            }
        };
        let nearest_structure = || {
            if self.filter.allows_structures() {
                query.nearest_structure(unit.position, unit.team)
            } else {
                None
            }
        };

        match self.priority {
            PriorityClass::UnitFirst => nearest_unit().or_else(nearest_structure),
            PriorityClass::StructureFirst => {
                let range = unit.weapon_range;
                let structure_in_range = || {
                    if self.filter.allows_structures() {
                        query.nearest_structure_within(unit.position, unit.team, range)
                    } else {
                        None
                    }
                };
                let unit_in_range = || {
                    if self.filter.allows_units() {
                        query.nearest_unit_within(unit.position, unit.team, range)
                    } else {
                        None
                    }
                };

                structure_in_range()
                    .or_else(unit_in_range)
                    // Nothing shootable yet: head for whichever is closer.
                    .or_else(|| nearer(unit, nearest_structure(), nearest_unit()))
            }
            PriorityClass::NearestOfEither => nearer(unit, nearest_unit(), nearest_structure()),
        }
    }
}

/// Whether the weapon reaches the candidate's surface.
pub fn in_weapon_range(unit: &UnitContext, candidate: &Candidate) -> bool {
    candidate.surface_distance_from(&unit.position) <= unit.weapon_range
}

/// The nearer of two optional candidates by center distance; `first` wins ties.
fn nearer(unit: &UnitContext, first: Option<Candidate>, second: Option<Candidate>) -> Option<Candidate> {
    match (first, second) {
        (Some(a), Some(b)) => {
            if b.distance_from(&unit.position) < a.distance_from(&unit.position) {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, b) => a.or(b),
    }
}
