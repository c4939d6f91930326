//! Unit AI system: decides targets, movement and weapons each tick.
//!
//! Builds one read-only `WorldView` per tick, calls the decision layer from
//! skirmish-unit-ai for every controlled unit, then writes the results back
//! into each unit's own components.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::events::SimEvent;
use skirmish_core::types::{Position, SerialId, Team};

use skirmish_unit_ai::query::{effective_radius, StructureEntry, UnitEntry};
use skirmish_unit_ai::{decide, Decision, PolicyTable, UnitContext, WorldView};

/// Snapshot every live unit and structure for this tick's queries.
pub fn build_view(world: &World) -> WorldView {
    let mut view = WorldView::new();

    for (_entity, (id, _unit, team, pos, vitals, hit_size)) in world
        .query::<(&SerialId, &Unit, &Team, &Position, &Vitals, Option<&HitSize>)>()
        .iter()
    {
        view.push_unit(UnitEntry {
            id: *id,
            team: *team,
            position: *pos,
            alive: vitals.alive,
            targetable: vitals.targetable,
            radius: effective_radius(hit_size.map(|h| h.0), None),
        });
    }

    for (_entity, (id, structure, team, pos, footprint)) in world
        .query::<(&SerialId, &Structure, &Team, &Position, Option<&Footprint>)>()
        .iter()
    {
        view.push_structure(StructureEntry {
            id: *id,
            team: *team,
            position: *pos,
            radius: effective_radius(None, footprint.map(|f| f.0)),
            is_base: structure.kind.is_base(),
        });
    }

    view
}

/// Run the unit AI for every alive, AI-controlled unit.
pub fn run(world: &mut World, policies: &PolicyTable, events: &mut Vec<SimEvent>) {
    let view = build_view(world);

    // Collect decisions first; every unit reads the same view.
    let mut decisions: Vec<(SerialId, Entity, Decision)> = Vec::new();
    {
        let mut query = world.query::<(
            &AiControlled,
            &SerialId,
            &Unit,
            &Team,
            &Position,
            &Vitals,
            &Mobility,
            &Facing,
            &Weapons,
            &CurrentTarget,
        )>();
        for (entity, (_ai, id, unit, team, pos, vitals, mobility, facing, weapons, current)) in
            query.iter()
        {
            if !vitals.alive {
                continue;
            }

            let ctx = UnitContext {
                id: *id,
                kind: unit.kind,
                team: *team,
                position: *pos,
                speed: mobility.speed,
                facing: facing.degrees,
                weapon_range: weapons.range,
                current_target: current.0,
            };
            decisions.push((*id, entity, decide(&ctx, policies, &view)));
        }
    }
    decisions.sort_by_key(|(id, _, _)| *id);

    // Apply decisions
    for (id, entity, decision) in decisions {
        if let Some(lost) = decision.lost_target {
            tracing::debug!(unit = id.0, target = lost.0, "target invalidated");
            events.push(SimEvent::TargetLost { id });
        }

        if let Ok(mut current) = world.get::<&mut CurrentTarget>(entity) {
            current.0 = decision.target;
        }
        if let Ok(mut order) = world.get::<&mut MoveOrder>(entity) {
            order.0 = decision.movement.intent;
        }
        if let Ok(mut facing) = world.get::<&mut Facing>(entity) {
            facing.degrees = decision.movement.facing;
        }
        if let Ok(mut weapons) = world.get::<&mut Weapons>(entity) {
            decision.engagement.apply(&mut weapons.mounts);
        }
    }
}
