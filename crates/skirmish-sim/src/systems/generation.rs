//! Passive generation and income-rate estimation.
//!
//! Standard base facilities receive shards, hexa-nodes receive fragments, on
//! fixed tick intervals. A sliding-window estimator samples each team's
//! primary base stock and derives a per-second income rate.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;

use skirmish_core::components::{ItemStorage, Structure};
use skirmish_core::constants::RATE_MIN_SPAN_SECS;
use skirmish_core::enums::{Item, StructureKind};
use skirmish_core::types::{SerialId, SimTime, Team};

use crate::config::EconomyConfig;

/// Sliding window of (time, stock) samples for one team and item.
#[derive(Debug, Clone, Default)]
pub struct RateEstimator {
    samples: VecDeque<(f64, u32)>,
    rate: f64,
}

impl RateEstimator {
    /// Record a sample and drop those older than `window_secs`.
    pub fn push(&mut self, time_secs: f64, count: u32, window_secs: f64) {
        self.samples.push_back((time_secs, count));
        while let Some(&(t, _)) = self.samples.front() {
            if t < time_secs - window_secs {
                self.samples.pop_front();
            } else {
                break;
            }
        }

        if self.samples.len() > 1 {
            let (first_t, first_c) = self.samples[0];
            let (last_t, last_c) = self.samples[self.samples.len() - 1];
            let span = last_t - first_t;
            if span > RATE_MIN_SPAN_SECS {
                self.rate = (last_c as f64 - first_c as f64) / span;
            }
        } else {
            self.rate = 0.0;
        }
    }

    /// Current estimate in items per second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// All economy bookkeeping for a match. Reset when the match restarts.
#[derive(Debug, Clone, Default)]
pub struct EconomyState {
    shard_timer: u64,
    fragment_timer: u64,
    last_sample_secs: f64,
    estimators: BTreeMap<(Team, Item), RateEstimator>,
}

impl EconomyState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Estimated income per second for a team and item.
    pub fn rate(&self, team: Team, item: Item) -> f64 {
        self.estimators
            .get(&(team, item))
            .map(RateEstimator::rate)
            .unwrap_or(0.0)
    }

    /// Every (team, item) pair with an estimate.
    pub fn rates(&self) -> impl Iterator<Item = (Team, Item, f64)> + '_ {
        self.estimators
            .iter()
            .map(|(&(team, item), est)| (team, item, est.rate()))
    }
}

/// Advance generation timers, pay out, and sample stock for rate estimation.
pub fn run(world: &mut World, state: &mut EconomyState, config: &EconomyConfig, time: &SimTime) {
    state.shard_timer += 1;
    state.fragment_timer += 1;

    if state.shard_timer >= config.shard_interval_ticks {
        state.shard_timer = 0;
        pay_out(world, Item::Shard, |kind| kind == StructureKind::BaseFacility);
    }
    if state.fragment_timer >= config.fragment_interval_ticks {
        state.fragment_timer = 0;
        pay_out(world, Item::Fragment, |kind| kind == StructureKind::HexaNode);
    }

    let now = time.elapsed_secs;
    if now - state.last_sample_secs > config.sample_interval_secs {
        state.last_sample_secs = now;
        for (team, storage) in primary_bases(world) {
            for item in [Item::Shard, Item::Fragment] {
                state
                    .estimators
                    .entry((team, item))
                    .or_default()
                    .push(now, storage.get(item), config.window_secs);
            }
        }
    }
}

/// Add one `item` to every non-derelict base facility matching `eligible`.
fn pay_out(world: &mut World, item: Item, eligible: impl Fn(StructureKind) -> bool) {
    let mut paid = 0;
    for (_entity, (structure, team, storage)) in
        world.query_mut::<(&Structure, &Team, &mut ItemStorage)>()
    {
        if *team == Team::DERELICT || !eligible(structure.kind) {
            continue;
        }
        storage.add(item, 1);
        paid += 1;
    }
    tracing::trace!(?item, bases = paid, "generation payout");
}

/// Each team's primary base (lowest serial id) and a copy of its storage.
fn primary_bases(world: &World) -> BTreeMap<Team, ItemStorage> {
    let mut best: BTreeMap<Team, (SerialId, ItemStorage)> = BTreeMap::new();
    for (_entity, (structure, team, id, storage)) in world
        .query::<(&Structure, &Team, &SerialId, &ItemStorage)>()
        .iter()
    {
        if *team == Team::DERELICT || !structure.kind.is_base() {
            continue;
        }
        let replace = best.get(team).map_or(true, |(best_id, _)| id < best_id);
        if replace {
            best.insert(*team, (*id, storage.clone()));
        }
    }
    best.into_iter()
        .map(|(team, (_, storage))| (team, storage))
        .collect()
}

/// Total stock per team across all of its base facilities.
pub fn team_stock(world: &World) -> BTreeMap<Team, BTreeMap<Item, u32>> {
    let mut totals: BTreeMap<Team, BTreeMap<Item, u32>> = BTreeMap::new();
    for (_entity, (team, storage)) in world.query::<(&Team, &ItemStorage)>().iter() {
        if *team == Team::DERELICT {
            continue;
        }
        let entry = totals.entry(*team).or_default();
        for (&item, &count) in &storage.items {
            *entry.entry(item).or_insert(0) += count;
        }
    }
    totals
}
