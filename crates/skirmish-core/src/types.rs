//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world units. One tile is `TILE_SIZE` world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Team identifier. `Team::DERELICT` owns unclaimed structures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Stable per-entity id, assigned monotonically at spawn and never reused
/// within a match. Nearest-candidate ties resolve to the lowest id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SerialId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Center-to-center distance in world units.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Angle toward another position in degrees (0 = +x, counter-clockwise).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let d = other.as_dvec2() - self.as_dvec2();
        d.y.atan2(d.x).to_degrees()
    }

    /// Distance in tiles.
    pub fn tiles_to(&self, other: &Position) -> f64 {
        self.range_to(other) / crate::constants::TILE_SIZE
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Speed magnitude (world units per second).
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Team {
    /// Owner of unclaimed structures. Eligible as a target for every team.
    pub const DERELICT: Team = Team(0);
    pub const SHARDED: Team = Team(1);
    pub const CRUX: Team = Team(2);
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
