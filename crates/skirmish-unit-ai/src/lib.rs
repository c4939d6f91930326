//! Unit AI for the skirmish simulation.
//!
//! Implements target acquisition, distance-banded movement and weapon gating
//! for controlled units, parameterized by a per-archetype policy table.

pub mod decision;
pub mod engagement;
pub mod error;
pub mod movement;
pub mod policy;
pub mod query;
pub mod selector;

pub use decision::{decide, Decision, UnitContext};
pub use error::DecisionError;
pub use policy::{get_policy, ArchetypePolicy, PolicyTable};
pub use query::{Candidate, EntityQuery, WorldView};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
