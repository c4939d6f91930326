//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// World units per tile.
pub const TILE_SIZE: f64 = 8.0;

// --- Targeting ---

/// Effective radius used when a candidate carries neither a hit size nor a footprint.
pub const DEFAULT_TARGET_RADIUS: f64 = TILE_SIZE / 2.0;

/// Center distances at or below this are treated as self-overlap.
pub const DEGENERATE_DISTANCE: f64 = 1e-6;

/// Arrival tolerance when drifting toward the enemy base with nothing to fight.
pub const BASE_ARRIVAL_TOLERANCE: f64 = 1.0;

/// Facing increment for the continuously spinning archetype (degrees per tick).
pub const OVERSEER_SPIN_PER_TICK: f64 = 0.02;

/// Overseer stand-off distance (15 tiles).
pub const OVERSEER_OPTIMAL_RANGE: f64 = 120.0;

/// Overseer starts backing off once closer than this.
pub const OVERSEER_MIN_RANGE: f64 = OVERSEER_OPTIMAL_RANGE - 10.0;

// --- Unit types ---

pub const TRIHEDRON_SPEED: f64 = 54.0;
pub const TRIHEDRON_HIT_SIZE: f64 = 10.0;
pub const TRIHEDRON_RANGE: f64 = 110.0;

pub const OVERSEER_SPEED: f64 = 36.0;
pub const OVERSEER_HIT_SIZE: f64 = 14.0;
pub const OVERSEER_RANGE: f64 = 140.0;

pub const DISINTEGRATOR_SPEED: f64 = 24.0;
pub const DISINTEGRATOR_HIT_SIZE: f64 = 18.0;
pub const DISINTEGRATOR_RANGE: f64 = 180.0;

pub const PRISM_SPEED: f64 = 48.0;
pub const PRISM_HIT_SIZE: f64 = 9.0;
pub const PRISM_RANGE: f64 = 130.0;

pub const MONOLITH_SPEED: f64 = 18.0;
pub const MONOLITH_HIT_SIZE: f64 = 22.0;
pub const MONOLITH_RANGE: f64 = 160.0;

// --- Structures ---

/// Footprint of a base facility (tiles per side).
pub const BASE_FACILITY_SIZE: u32 = 4;

/// Footprint of a hexa-node base facility (tiles per side).
pub const HEXA_NODE_SIZE: u32 = 3;

/// Footprint of the spire production block (tiles per side).
pub const SPIRE_SIZE: u32 = 2;

/// Footprint of a generic wall or derelict block (tiles per side).
pub const WALL_SIZE: u32 = 1;

// --- Deployment ---

/// Deployment blocks must be placed within this many tiles of a friendly base facility.
pub const MAX_DEPLOYMENT_RANGE_TILES: f64 = 30.0;

// --- Generation ---

/// Ticks between shard payouts to standard base facilities (5 s).
pub const SHARD_INTERVAL_TICKS: u64 = 60 * 5;

/// Ticks between fragment payouts to hexa-node base facilities (10 s).
pub const FRAGMENT_INTERVAL_TICKS: u64 = 60 * 10;

/// Seconds between stock samples taken by the income-rate estimator.
pub const RATE_SAMPLE_INTERVAL_SECS: f64 = 0.5;

/// Width of the income-rate estimator window (seconds).
pub const RATE_WINDOW_SECS: f64 = 5.0;

/// Minimum time span for a rate to be computed.
pub const RATE_MIN_SPAN_SECS: f64 = 0.001;

// --- World bounds ---

/// Units further than this from the origin are culled.
pub const WORLD_RADIUS: f64 = 4_000.0;
