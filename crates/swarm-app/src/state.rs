//! Runner state shared with the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use swarm_core::commands::PlayerCommand;
use swarm_core::state::GameStateSnapshot;
use swarm_sim::systems::input::InputState;

/// Commands sent from the outside into the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Replace the sampled directional input (sources already merged).
    SetInput(InputState),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared runner state.
///
/// The loop thread owns the engine; the outside reaches it through the
/// command channel and reads the latest snapshot from the shared slot.
/// `mpsc::Sender` is Send but not Sync, hence the `Mutex` around it.
pub struct AppState {
    /// Channel sender to the game loop thread; `None` until spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
