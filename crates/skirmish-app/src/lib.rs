//! Headless skirmish host.
//!
//! Runs the simulation engine on its own thread, forwards commands to it
//! over a channel, and keeps the latest snapshot for polling.

pub mod config;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
