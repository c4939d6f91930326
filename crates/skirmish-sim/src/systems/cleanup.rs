//! Cleanup system: removes units that are dead or out of bounds.

use hecs::{Entity, World};

use skirmish_core::components::{Unit, Vitals};
use skirmish_core::constants::WORLD_RADIUS;
use skirmish_core::events::SimEvent;
use skirmish_core::types::{Position, SerialId};

/// Despawn dead units and units beyond the world boundary.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    let mut removed: Vec<SerialId> = Vec::new();

    for (entity, (_unit, id, pos, vitals)) in
        world.query_mut::<(&Unit, &SerialId, &Position, &Vitals)>()
    {
        let range_sq = pos.x * pos.x + pos.y * pos.y;
        if !vitals.alive || range_sq > radius_sq {
            despawn_buffer.push(entity);
            removed.push(*id);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    removed.sort();
    for id in removed {
        tracing::debug!(unit = id.0, "unit despawned");
        events.push(SimEvent::UnitDespawned { id });
    }
}
