//! Entity query contract and a plain-data world view implementing it.
//!
//! The host builds a [`WorldView`] once per tick from its live entities.
//! All lookups are linear scans over that view; nothing is cached between ticks.

use skirmish_core::components::TargetRef;
use skirmish_core::constants::{DEFAULT_TARGET_RADIUS, TILE_SIZE};
use skirmish_core::enums::CandidateKind;
use skirmish_core::types::{Position, SerialId, Team};

/// A potential target, valid only for the tick that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub id: SerialId,
    pub kind: CandidateKind,
    pub team: Team,
    pub position: Position,
    /// Effective radius (world units) used for surface-distance checks.
    pub radius: f64,
}

impl Candidate {
    pub fn target_ref(&self) -> TargetRef {
        TargetRef {
            id: self.id,
            kind: self.kind,
        }
    }

    /// Center-to-center distance from `point`.
    pub fn distance_from(&self, point: &Position) -> f64 {
        point.range_to(&self.position)
    }

    /// Distance from `point` to the candidate's surface. Negative when inside it.
    pub fn surface_distance_from(&self, point: &Position) -> f64 {
        self.distance_from(point) - self.radius
    }
}

/// Effective radius of a target: half the structure footprint, else half the
/// unit hit size, else a default.
pub fn effective_radius(hit_size: Option<f64>, footprint_tiles: Option<u32>) -> f64 {
    if let Some(size) = footprint_tiles {
        size as f64 * TILE_SIZE / 2.0
    } else if let Some(hit) = hit_size {
        hit / 2.0
    } else {
        DEFAULT_TARGET_RADIUS
    }
}

/// Read-only lookups the decision layer needs from the host world.
pub trait EntityQuery {
    /// Nearest alive, targetable unit whose team is not `exclude_team`.
    fn nearest_unit(&self, point: Position, exclude_team: Team) -> Option<Candidate>;

    /// Nearest structure whose team is not `exclude_team` (derelict included).
    fn nearest_structure(&self, point: Position, exclude_team: Team) -> Option<Candidate>;

    /// Nearest eligible unit whose surface lies within `range` of `point`.
    fn nearest_unit_within(&self, point: Position, exclude_team: Team, range: f64)
        -> Option<Candidate>;

    /// Nearest eligible structure whose surface lies within `range` of `point`.
    fn nearest_structure_within(
        &self,
        point: Position,
        exclude_team: Team,
        range: f64,
    ) -> Option<Candidate>;

    /// Nearest base facility belonging to an opposing, non-derelict team.
    fn nearest_enemy_base(&self, point: Position, team: Team) -> Option<Position>;

    /// Resolve a handle, returning it only if it still exists and is still
    /// eligible as a target for `team`.
    fn revalidate(&self, target: TargetRef, team: Team) -> Option<Candidate>;
}

/// A live unit as seen by the decision layer.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    pub id: SerialId,
    pub team: Team,
    pub position: Position,
    pub alive: bool,
    pub targetable: bool,
    pub radius: f64,
}

/// A stationary structure as seen by the decision layer.
#[derive(Debug, Clone, Copy)]
pub struct StructureEntry {
    pub id: SerialId,
    pub team: Team,
    pub position: Position,
    pub radius: f64,
    pub is_base: bool,
}

impl UnitEntry {
    fn eligible_for(&self, team: Team) -> bool {
        self.team != team && self.alive && self.targetable
    }

    fn candidate(&self) -> Candidate {
        Candidate {
            id: self.id,
            kind: CandidateKind::Unit,
            team: self.team,
            position: self.position,
            radius: self.radius,
        }
    }
}

impl StructureEntry {
    fn candidate(&self) -> Candidate {
        Candidate {
            id: self.id,
            kind: CandidateKind::Structure,
            team: self.team,
            position: self.position,
            radius: self.radius,
        }
    }
}

/// Snapshot of every live unit and structure for one tick.
#[derive(Debug, Clone, Default)]
pub struct WorldView {
    units: Vec<UnitEntry>,
    structures: Vec<StructureEntry>,
}

impl WorldView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_unit(&mut self, entry: UnitEntry) {
        self.units.push(entry);
    }

    pub fn push_structure(&mut self, entry: StructureEntry) {
        self.structures.push(entry);
    }

    pub fn units(&self) -> &[UnitEntry] {
        &self.units
    }

    pub fn structures(&self) -> &[StructureEntry] {
        &self.structures
    }
}

/// Pick the closest item by center distance. Equal distances go to the lowest id,
/// so the result does not depend on storage order.
fn nearest_by<'a, T: 'a>(
    items: impl Iterator<Item = &'a T>,
    point: &Position,
    id: impl Fn(&T) -> SerialId,
    position: impl Fn(&T) -> Position,
) -> Option<&'a T> {
    let mut best: Option<(&'a T, f64)> = None;
    for item in items {
        let dist = point.range_to(&position(item));
        let better = match best {
            None => true,
            Some((current, best_dist)) => {
                dist < best_dist || (dist == best_dist && id(item) < id(current))
            }
        };
        if better {
            best = Some((item, dist));
        }
    }
    best.map(|(item, _)| item)
}

impl EntityQuery for WorldView {
    fn nearest_unit(&self, point: Position, exclude_team: Team) -> Option<Candidate> {
        nearest_by(
            self.units.iter().filter(|u| u.eligible_for(exclude_team)),
            &point,
            |u| u.id,
            |u| u.position,
        )
        .map(UnitEntry::candidate)
    }

    fn nearest_structure(&self, point: Position, exclude_team: Team) -> Option<Candidate> {
        nearest_by(
            self.structures.iter().filter(|s| s.team != exclude_team),
            &point,
            |s| s.id,
            |s| s.position,
        )
        .map(StructureEntry::candidate)
    }

    fn nearest_unit_within(
        &self,
        point: Position,
        exclude_team: Team,
        range: f64,
    ) -> Option<Candidate> {
        nearest_by(
            self.units.iter().filter(|u| {
                u.eligible_for(exclude_team) && u.candidate().surface_distance_from(&point) <= range
            }),
            &point,
            |u| u.id,
            |u| u.position,
        )
        .map(UnitEntry::candidate)
    }

    fn nearest_structure_within(
        &self,
        point: Position,
        exclude_team: Team,
        range: f64,
    ) -> Option<Candidate> {
        nearest_by(
            self.structures.iter().filter(|s| {
                s.team != exclude_team && s.candidate().surface_distance_from(&point) <= range
            }),
            &point,
            |s| s.id,
            |s| s.position,
        )
        .map(StructureEntry::candidate)
    }

    fn nearest_enemy_base(&self, point: Position, team: Team) -> Option<Position> {
        nearest_by(
            self.structures
                .iter()
                .filter(|s| s.is_base && s.team != team && s.team != Team::DERELICT),
            &point,
            |s| s.id,
            |s| s.position,
        )
        .map(|s| s.position)
    }

    fn revalidate(&self, target: TargetRef, team: Team) -> Option<Candidate> {
        match target.kind {
            CandidateKind::Unit => self
                .units
                .iter()
                .find(|u| u.id == target.id && u.eligible_for(team))
                .map(UnitEntry::candidate),
            CandidateKind::Structure => self
                .structures
                .iter()
                .find(|s| s.id == target.id && s.team != team)
                .map(StructureEntry::candidate),
        }
    }
}
