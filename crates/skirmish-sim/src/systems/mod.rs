//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! Per-match bookkeeping that is not attached to an entity, such as economy
//! timers, is owned by the engine and passed in.

pub mod cleanup;
pub mod deployment;
pub mod generation;
pub mod movement;
pub mod snapshot;
pub mod unit_ai;
