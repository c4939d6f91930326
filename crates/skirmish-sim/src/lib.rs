//! Headless skirmish simulation.
//!
//! Owns the hecs ECS world, runs the unit AI and the other systems at a fixed
//! tick rate, and produces MatchSnapshots for whatever host drives it.

pub mod config;
pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, EconomyConfig, SimConfig};
pub use engine::SimulationEngine;
pub use skirmish_core as core;
