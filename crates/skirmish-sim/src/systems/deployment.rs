//! Deployment system: validates block placement near a friendly base.
//!
//! Deployment blocks turn into units when placed within range of one of the
//! team's base facilities. Out-of-range placements are removed and their cost
//! refunded to the nearest base facility.

use hecs::{Entity, World};

use skirmish_core::components::{ItemStorage, Structure};
use skirmish_core::constants::MAX_DEPLOYMENT_RANGE_TILES;
use skirmish_core::enums::{BlockKind, Item, StructureKind, UnitKind};
use skirmish_core::events::SimEvent;
use skirmish_core::types::{Position, SerialId, Team};

use crate::world_setup::{spawn_structure, spawn_unit};

/// Why a placement was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeploymentError {
    #[error("team {0:?} has no base facility")]
    NoBase(Team),

    #[error("placed {distance_tiles:.1} tiles from the nearest base (max {max})")]
    OutOfRange { distance_tiles: f64, max: f64 },
}

/// Unit produced by a deployment block, if any.
pub fn deployed_unit(block: BlockKind) -> Option<UnitKind> {
    match block {
        BlockKind::TrihedronDeployment => Some(UnitKind::Trihedron),
        BlockKind::OverseerDeployment => Some(UnitKind::Overseer),
        BlockKind::DisintegratorDeployment => Some(UnitKind::Disintegrator),
        BlockKind::SpireOfShards => None,
    }
}

/// Build cost of a block.
pub fn block_requirements(block: BlockKind) -> &'static [(Item, u32)] {
    match block {
        BlockKind::TrihedronDeployment => &[(Item::Shard, 40)],
        BlockKind::OverseerDeployment => &[(Item::Shard, 80), (Item::Fragment, 5)],
        BlockKind::DisintegratorDeployment => &[(Item::Shard, 120), (Item::Fragment, 10)],
        BlockKind::SpireOfShards => &[(Item::Shard, 60)],
    }
}

/// Nearest base facility of `team` to `position`, with its distance in tiles.
pub fn nearest_base(world: &World, team: Team, position: &Position) -> Option<(Entity, f64)> {
    let mut best: Option<(Entity, SerialId, f64)> = None;
    for (entity, (structure, base_team, pos, id)) in world
        .query::<(&Structure, &Team, &Position, &SerialId)>()
        .iter()
    {
        if !structure.kind.is_base() || *base_team != team {
            continue;
        }
        let tiles = position.tiles_to(pos);
        let better = match best {
            None => true,
            Some((_, best_id, best_tiles)) => {
                tiles < best_tiles || (tiles == best_tiles && *id < best_id)
            }
        };
        if better {
            best = Some((entity, *id, tiles));
        }
    }
    best.map(|(entity, _, tiles)| (entity, tiles))
}

/// Check a placement against the deployment range rule.
/// Returns the nearest base and its distance when the placement is legal.
pub fn validate_placement(
    world: &World,
    team: Team,
    position: &Position,
) -> Result<(Entity, f64), DeploymentError> {
    let (base, distance_tiles) =
        nearest_base(world, team, position).ok_or(DeploymentError::NoBase(team))?;
    if distance_tiles > MAX_DEPLOYMENT_RANGE_TILES {
        return Err(DeploymentError::OutOfRange {
            distance_tiles,
            max: MAX_DEPLOYMENT_RANGE_TILES,
        });
    }
    Ok((base, distance_tiles))
}

/// Handle a block placement: spawn, keep, or reject and refund.
pub fn place_block(
    world: &mut World,
    next_id: &mut u32,
    team: Team,
    block: BlockKind,
    position: Position,
    events: &mut Vec<SimEvent>,
) {
    match validate_placement(world, team, &position) {
        Ok((_base, distance_tiles)) => {
            tracing::debug!(?block, ?team, distance_tiles, "placement accepted");
            match deployed_unit(block) {
                Some(kind) => {
                    let entity = spawn_unit(world, next_id, kind, team, position);
                    if let Ok(id) = world.get::<&SerialId>(entity).map(|id| *id) {
                        events.push(SimEvent::UnitDeployed {
                            team,
                            kind,
                            id,
                            position,
                        });
                    }
                }
                None => {
                    let entity =
                        spawn_structure(world, next_id, StructureKind::Spire, team, position);
                    if let Ok(id) = world.get::<&SerialId>(entity).map(|id| *id) {
                        events.push(SimEvent::StructurePlaced { team, block, id });
                    }
                }
            }
        }
        Err(DeploymentError::NoBase(_)) => {
            tracing::info!(?block, ?team, "placement rejected: no base facility");
            events.push(SimEvent::DeploymentRejected {
                team,
                block,
                distance_tiles: None,
                refunded: false,
            });
        }
        Err(DeploymentError::OutOfRange { distance_tiles, max }) => {
            tracing::info!(?block, ?team, distance_tiles, max, "placement rejected: out of range");
            let refunded = refund(world, team, &position, block);
            events.push(SimEvent::DeploymentRejected {
                team,
                block,
                distance_tiles: Some(distance_tiles),
                refunded,
            });
        }
    }
}

/// Return a block's cost to the nearest base facility's storage.
fn refund(world: &mut World, team: Team, position: &Position, block: BlockKind) -> bool {
    let Some((base, _)) = nearest_base(world, team, position) else {
        return false;
    };
    match world.get::<&mut ItemStorage>(base) {
        Ok(mut storage) => {
            for &(item, amount) in block_requirements(block) {
                storage.add(item, amount);
            }
            true
        }
        Err(_) => false,
    }
}
