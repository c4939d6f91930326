//! Scenario definitions: starting layouts for a match.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::enums::{ScenarioId, StructureKind, UnitKind};
use skirmish_core::types::{Position, Team};

use crate::world_setup::{spawn_structure, spawn_unit};

/// Populate the world for a given scenario.
pub fn setup(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32, scenario: ScenarioId) {
    match scenario {
        ScenarioId::Duel => build_duel(world, next_id),
        ScenarioId::Siege => build_siege(world, rng, next_id),
    }
}

/// Duel: two bases 1600 units apart, three units each.
/// Fixed layout; no randomness.
fn build_duel(world: &mut World, next_id: &mut u32) {
    let west = Team::SHARDED;
    let east = Team::CRUX;

    spawn_structure(world, next_id, StructureKind::BaseFacility, west, Position::new(-800.0, 0.0));
    spawn_structure(world, next_id, StructureKind::BaseFacility, east, Position::new(800.0, 0.0));
    spawn_structure(world, next_id, StructureKind::HexaNode, east, Position::new(800.0, 320.0));

    let roster = [
        (west, UnitKind::Trihedron, Position::new(-600.0, 40.0)),
        (west, UnitKind::Overseer, Position::new(-650.0, -40.0)),
        (west, UnitKind::Disintegrator, Position::new(-700.0, 0.0)),
        (east, UnitKind::Prism, Position::new(600.0, 0.0)),
        (east, UnitKind::Monolith, Position::new(650.0, 60.0)),
        (east, UnitKind::Trihedron, Position::new(600.0, -60.0)),
    ];
    for (team, kind, position) in roster {
        spawn_unit(world, next_id, kind, team, position);
    }
}

/// Siege: a defended base at the origin, derelict blocks scattered around it,
/// and an attacking force spawning at random spots to the east.
fn build_siege(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32) {
    let defender = Team::SHARDED;
    let attacker = Team::CRUX;

    spawn_structure(world, next_id, StructureKind::BaseFacility, defender, Position::new(0.0, 0.0));
    spawn_structure(world, next_id, StructureKind::BaseFacility, attacker, Position::new(1500.0, 0.0));

    for _ in 0..12 {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius: f64 = rng.gen_range(300.0..700.0);
        let position = Position::new(radius * angle.cos(), radius * angle.sin());
        spawn_structure(world, next_id, StructureKind::Wall, Team::DERELICT, position);
    }

    spawn_unit(world, next_id, UnitKind::Monolith, defender, Position::new(80.0, 0.0));
    spawn_unit(world, next_id, UnitKind::Prism, defender, Position::new(60.0, 60.0));

    for kind in [UnitKind::Disintegrator, UnitKind::Disintegrator, UnitKind::Trihedron] {
        let x: f64 = rng.gen_range(1100.0..1300.0);
        let y: f64 = rng.gen_range(-200.0..200.0);
        spawn_unit(world, next_id, kind, attacker, Position::new(x, y));
    }
}
