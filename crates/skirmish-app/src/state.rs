//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::MatchSnapshot;
use skirmish_sim::SimConfig;

use crate::game_loop::{self, LoopOptions};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Errors raised by the host when talking to the game loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop channel closed")]
    ChannelClosed,

    #[error("game loop thread panicked")]
    LoopPanicked,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] skirmish_sim::ConfigError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start_simulation`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
    /// Handle of the running game loop thread.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if not already running.
    pub fn start_simulation(&self, config: SimConfig, options: LoopOptions) -> Result<(), AppError> {
        let mut handle_lock = self.loop_handle.lock().map_err(|_| AppError::LockPoisoned)?;
        if handle_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, options, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        *tx_lock = Some(cmd_tx);
        *handle_lock = Some(handle);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the game loop to stop.
    pub fn shutdown(&self) -> Result<(), AppError> {
        self.send(GameLoopCommand::Shutdown)
    }

    /// Block until the game loop thread exits.
    pub fn join(&self) -> Result<(), AppError> {
        let handle = self
            .loop_handle
            .lock()
            .map_err(|_| AppError::LockPoisoned)?
            .take()
            .ok_or(AppError::NotStarted)?;
        handle.join().map_err(|_| AppError::LoopPanicked)
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn get_snapshot(&self) -> Result<Option<MatchSnapshot>, AppError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| AppError::LockPoisoned)?;
        Ok(lock.clone())
    }

    fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::ChannelClosed),
            None => Err(AppError::NotStarted),
        }
    }
}
