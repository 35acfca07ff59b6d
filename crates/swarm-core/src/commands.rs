//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Discard the session and start a fresh one.
    Restart,
}
