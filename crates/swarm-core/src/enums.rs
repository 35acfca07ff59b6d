//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally.
    #[default]
    Active,
    /// Frozen by the player; resumable.
    Paused,
    /// The clock ran out with the player alive.
    Victory,
    /// Player health reached zero.
    Defeat,
}

impl GamePhase {
    /// Whether this phase ends the session (win/lose overlay territory).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}

/// One of the four arena boundaries used for enemy spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenEdge {
    Left,
    Right,
    Top,
    Bottom,
}
