//! Entity spawn factories for setting up the simulation world.
//!
//! Creates units and structures with appropriate component bundles.
//! Every spawned entity receives the next `SerialId`.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{Position, SerialId, Team, Velocity};

/// Hand out the next serial id.
pub fn next_serial(counter: &mut u32) -> SerialId {
    let id = SerialId(*counter);
    *counter += 1;
    id
}

/// Spawn an AI-controlled unit.
pub fn spawn_unit(
    world: &mut World,
    next_id: &mut u32,
    kind: UnitKind,
    team: Team,
    position: Position,
) -> Entity {
    let (speed, hit_size, range, mounts) = unit_type_params(kind);

    world.spawn((
        next_serial(next_id),
        Unit { kind },
        AiControlled,
        team,
        position,
        Velocity::default(),
        Vitals {
            alive: true,
            targetable: true,
        },
        HitSize(hit_size),
        Mobility { speed },
        Facing::default(),
        Weapons {
            range,
            mounts: vec![WeaponMount::default(); mounts],
        },
        CurrentTarget::default(),
        MoveOrder::default(),
    ))
}

/// Spawn a stationary structure. Base facilities get item storage.
pub fn spawn_structure(
    world: &mut World,
    next_id: &mut u32,
    kind: StructureKind,
    team: Team,
    position: Position,
) -> Entity {
    let size = structure_size(kind);
    let entity = world.spawn((
        next_serial(next_id),
        Structure { kind },
        team,
        position,
        Footprint(size),
    ));
    if kind.is_base() {
        let _ = world.insert_one(entity, ItemStorage::default());
    }
    entity
}

/// Kinematic and weapon parameters for a unit kind:
/// (speed units/s, hit size, weapon range, mount count).
fn unit_type_params(kind: UnitKind) -> (f64, f64, f64, usize) {
    match kind {
        UnitKind::Trihedron => (TRIHEDRON_SPEED, TRIHEDRON_HIT_SIZE, TRIHEDRON_RANGE, 2),
        UnitKind::Overseer => (OVERSEER_SPEED, OVERSEER_HIT_SIZE, OVERSEER_RANGE, 3),
        UnitKind::Disintegrator => (
            DISINTEGRATOR_SPEED,
            DISINTEGRATOR_HIT_SIZE,
            DISINTEGRATOR_RANGE,
            1,
        ),
        UnitKind::Prism => (PRISM_SPEED, PRISM_HIT_SIZE, PRISM_RANGE, 2),
        UnitKind::Monolith => (MONOLITH_SPEED, MONOLITH_HIT_SIZE, MONOLITH_RANGE, 4),
    }
}

/// Footprint in tiles for a structure kind.
fn structure_size(kind: StructureKind) -> u32 {
    match kind {
        StructureKind::BaseFacility => BASE_FACILITY_SIZE,
        StructureKind::HexaNode => HEXA_NODE_SIZE,
        StructureKind::Spire => SPIRE_SIZE,
        StructureKind::Wall => WALL_SIZE,
    }
}

/// Find the live entity carrying `id`.
pub fn find_by_serial(world: &World, id: SerialId) -> Option<Entity> {
    world
        .query::<&SerialId>()
        .iter()
        .find(|(_, serial)| **serial == id)
        .map(|(entity, _)| entity)
}
