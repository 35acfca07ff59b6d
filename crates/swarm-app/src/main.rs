//! Headless demo session: runs one unattended game to completion and
//! prints the final snapshot as JSON.
//!
//! By default the engine is stepped directly (as fast as it will go);
//! with `--realtime` the 60 Hz loop thread runs instead and the main
//! thread polls the shared snapshot slot, the way a frontend would.

use std::time::Duration;

use swarm_core::constants::DT;
use swarm_core::enums::GamePhase;
use swarm_core::state::GameStateSnapshot;
use swarm_sim::engine::{SimConfig, SimulationEngine};

use swarm_app::game_loop;
use swarm_app::state::{AppState, GameLoopCommand};

fn main() {
    env_logger::init();

    if std::env::args().any(|arg| arg == "--realtime") {
        run_realtime();
    } else {
        run_headless();
    }
}

/// Step the engine directly, logging a HUD line once per simulated second.
fn run_headless() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut last_logged_sec = u64::MAX;

    loop {
        let snapshot = engine.tick(DT);

        let second = snapshot.time.elapsed_secs as u64;
        if second != last_logged_sec {
            last_logged_sec = second;
            log_hud_line(&snapshot);
        }

        if snapshot.hud.is_game_over {
            print_result(&snapshot);
            break;
        }
    }
}

/// Run the 60 Hz loop thread and poll the snapshot slot once per second.
fn run_realtime() {
    let app_state = AppState::new();

    let cmd_tx = game_loop::spawn_game_loop(app_state.latest_snapshot.clone());
    if let Ok(mut slot) = app_state.command_tx.lock() {
        *slot = Some(cmd_tx);
    }
    if let Ok(mut running) = app_state.running.lock() {
        *running = true;
    }

    loop {
        std::thread::sleep(Duration::from_secs(1));

        let snapshot = match app_state.latest_snapshot.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => break,
        };

        let Some(snapshot) = snapshot else { continue };
        log_hud_line(&snapshot);

        if snapshot.hud.is_game_over {
            print_result(&snapshot);
            if let Ok(slot) = app_state.command_tx.lock() {
                if let Some(tx) = slot.as_ref() {
                    let _ = tx.send(GameLoopCommand::Shutdown);
                }
            }
            break;
        }
    }
}

fn log_hud_line(snapshot: &GameStateSnapshot) {
    log::info!(
        "t={:>2}s hp={:>3.0}/{:.0} enemies={} score={}",
        snapshot.time.elapsed_secs as u64,
        snapshot.hud.current_health,
        snapshot.hud.maximum_health,
        snapshot.enemies.len(),
        snapshot.hud.score,
    );
}

fn print_result(snapshot: &GameStateSnapshot) {
    let outcome = match snapshot.phase {
        GamePhase::Victory => "survived the full minute",
        GamePhase::Defeat => "overrun",
        _ => "stopped",
    };
    log::info!(
        "session over after {:.1}s: {outcome}",
        snapshot.time.elapsed_secs
    );

    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("failed to serialize final snapshot: {err}"),
    }
}
