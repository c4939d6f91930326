//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::enums::{GamePhase, Item, ScenarioId};
use skirmish_core::events::SimEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SerialId, SimTime, Team};

use super::generation::{team_stock, EconomyState};

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scenario: Option<ScenarioId>,
    economy: &EconomyState,
    events: Vec<SimEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        scenario,
        units: build_units(world),
        structures: build_structures(world),
        economy: build_economy(world, economy),
        events,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(
            &SerialId,
            &Unit,
            &Team,
            &Position,
            &Facing,
            &Vitals,
            &CurrentTarget,
            &MoveOrder,
            &Weapons,
        )>()
        .iter()
        .map(
            |(_, (id, unit, team, pos, facing, vitals, target, order, weapons))| UnitView {
                id: *id,
                kind: unit.kind,
                team: *team,
                position: *pos,
                facing: facing.degrees,
                alive: vitals.alive,
                targetable: vitals.targetable,
                target: target.0,
                intent: order.0,
                mounts: weapons.mounts.clone(),
            },
        )
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

fn build_structures(world: &World) -> Vec<StructureView> {
    let mut structures: Vec<StructureView> = world
        .query::<(&SerialId, &Structure, &Team, &Position, &Footprint)>()
        .iter()
        .map(|(_, (id, structure, team, pos, footprint))| StructureView {
            id: *id,
            kind: structure.kind,
            team: *team,
            position: *pos,
            size: footprint.0,
        })
        .collect();

    structures.sort_by_key(|s| s.id);
    structures
}

/// Stock summed over every base of a team, with rates from the estimator.
fn build_economy(world: &World, economy: &EconomyState) -> Vec<TeamEconomyView> {
    let mut views: BTreeMap<Team, TeamEconomyView> = team_stock(world)
        .into_iter()
        .map(|(team, stock)| {
            (
                team,
                TeamEconomyView {
                    team,
                    stock,
                    rates: BTreeMap::new(),
                },
            )
        })
        .collect();

    for (team, item, rate) in economy.rates() {
        let view = views.entry(team).or_insert_with(|| TeamEconomyView {
            team,
            ..Default::default()
        });
        view.rates.insert(item, rate);
    }

    for view in views.values_mut() {
        for item in [Item::Shard, Item::Fragment] {
            view.rates.entry(item).or_insert(0.0);
        }
    }

    views.into_values().collect()
}
