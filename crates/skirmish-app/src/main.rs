//! Headless skirmish runner.
//!
//! Usage: `skirmish [config.json]`. Runs one match for the configured number of
//! ticks and prints the final snapshot as JSON on stdout.

use std::process::ExitCode;

use skirmish_app::config::AppConfig;
use skirmish_app::game_loop::LoopOptions;
use skirmish_app::state::{AppError, AppState};
use skirmish_core::commands::PlayerCommand;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading config");
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    let state = AppState::new();
    state.start_simulation(
        config.sim.clone(),
        LoopOptions {
            max_ticks: Some(config.ticks),
            realtime: config.realtime,
        },
    )?;
    state.send_command(PlayerCommand::StartMatch {
        scenario: config.scenario,
    })?;
    for command in config.commands {
        state.send_command(command)?;
    }
    state.join()?;

    if let Some(snapshot) = state.get_snapshot()? {
        tracing::info!(
            tick = snapshot.time.tick,
            units = snapshot.units.len(),
            structures = snapshot.structures.len(),
            "match finished"
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
