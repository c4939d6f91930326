//! Game loop thread: runs the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skirmish_core::constants::TICK_RATE;
use skirmish_core::state::MatchSnapshot;
use skirmish_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop is paced and when it stops on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Stop once simulation time reaches this many ticks.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to match wall-clock time (scaled by time scale).
    pub realtime: bool,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, options, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or the tick limit.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
    latest_snapshot: &Mutex<Option<MatchSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    tracing::info!(tick = engine.time().tick, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::warn!("command channel disconnected");
                    return;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        for event in &snapshot.events {
            tracing::debug!(?event, "sim event");
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if options
            .max_ticks
            .is_some_and(|max| engine.time().tick >= max)
        {
            tracing::info!(tick = engine.time().tick, "tick limit reached");
            return;
        }

        if !options.realtime {
            // Lobby ticks are idle; don't spin the CPU while waiting for StartMatch.
            if engine.time().tick == 0 {
                std::thread::yield_now();
            }
            continue;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
