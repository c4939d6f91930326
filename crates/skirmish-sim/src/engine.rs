//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `MatchSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::Vitals;
use skirmish_core::enums::{GamePhase, ScenarioId};
use skirmish_core::events::SimEvent;
use skirmish_core::state::MatchSnapshot;
use skirmish_core::types::SimTime;
use skirmish_unit_ai::PolicyTable;

use crate::config::{EconomyConfig, SimConfig};
use crate::scenario;
use crate::systems;
use crate::systems::generation::EconomyState;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    scenario: Option<ScenarioId>,
    time_scale: f64,
    seed: u64,
    rng: ChaCha8Rng,
    next_serial: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    policies: PolicyTable,
    economy: EconomyState,
    economy_config: EconomyConfig,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let policies = config.policies();
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            scenario: None,
            time_scale: config.time_scale.clamp(0.0, 4.0),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_serial: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            policies,
            economy: EconomyState::default(),
            economy_config: config.economy,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.scenario,
            &self.economy,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Scenario of the running match, if one was started.
    pub fn scenario(&self) -> Option<ScenarioId> {
        self.scenario
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Economy bookkeeping (timers and rate estimates).
    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    /// Policy table in effect for this engine.
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Get a mutable reference to the ECS world (for tests that stage layouts).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Start an empty match so tests can place entities by hand.
    #[cfg(test)]
    pub fn start_empty(&mut self) {
        self.phase = GamePhase::Active;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch { scenario } => {
                if self.phase == GamePhase::Lobby {
                    self.load_scenario(scenario);
                    tracing::info!(?scenario, seed = self.seed, "match started");
                }
            }
            PlayerCommand::RestartMatch => {
                if let Some(scenario) = self.scenario {
                    self.world.clear();
                    self.economy.reset();
                    self.rng = ChaCha8Rng::seed_from_u64(self.seed);
                    self.next_serial = 0;
                    self.load_scenario(scenario);
                    tracing::info!(?scenario, "match restarted");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::PlaceBlock {
                team,
                block,
                position,
            } => {
                systems::deployment::place_block(
                    &mut self.world,
                    &mut self.next_serial,
                    team,
                    block,
                    position,
                    &mut self.events,
                );
            }
            PlayerCommand::SpawnUnit {
                team,
                kind,
                position,
            } => {
                world_setup::spawn_unit(&mut self.world, &mut self.next_serial, kind, team, position);
            }
            PlayerCommand::KillUnit { id } => {
                match world_setup::find_by_serial(&self.world, id)
                    .and_then(|e| self.world.get::<&mut Vitals>(e).ok())
                {
                    Some(mut vitals) => vitals.alive = false,
                    None => tracing::warn!(unit = id.0, "kill ignored: no such unit"),
                }
            }
            PlayerCommand::SetTargetable { id, targetable } => {
                match world_setup::find_by_serial(&self.world, id)
                    .and_then(|e| self.world.get::<&mut Vitals>(e).ok())
                {
                    Some(mut vitals) => vitals.targetable = targetable,
                    None => tracing::warn!(unit = id.0, "targetable ignored: no such unit"),
                }
            }
        }
    }

    fn load_scenario(&mut self, scenario: ScenarioId) {
        scenario::setup(&mut self.world, &mut self.rng, &mut self.next_serial, scenario);
        self.scenario = Some(scenario);
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Unit AI (targets, movement intents, weapon mounts)
        systems::unit_ai::run(&mut self.world, &self.policies, &mut self.events);
        // 2. Motion primitive + integration
        systems::movement::run(&mut self.world);
        // 3. Passive generation and rate sampling
        systems::generation::run(
            &mut self.world,
            &mut self.economy,
            &self.economy_config,
            &self.time,
        );
        // 4. Cleanup (dead, out of bounds)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
