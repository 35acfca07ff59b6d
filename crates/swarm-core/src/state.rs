//! Core simulation state and the snapshot views sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{SimTime, Vec2};

/// Roster record for one active enemy. Also attached verbatim to the
/// enemy's world entity as a component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyData {
    /// Globally unique, monotonically assigned id.
    pub id: u32,
    /// Movement speed fixed at spawn time (pixels per second).
    pub movement_speed: f64,
}

/// Spawn policy knobs embedded in the core state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Game time at which the spawn clock last fired.
    pub last_spawn_time: f64,
    /// Current seconds between spawns; shrinks with the difficulty ramp.
    pub spawn_interval: f64,
    /// Roster size cap.
    pub maximum_enemies: usize,
}

/// The authoritative simulation state, replaced wholesale by every
/// reducer application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreState {
    pub remaining_time: f64,
    pub current_health: f64,
    pub maximum_health: f64,
    pub spawn_config: SpawnConfig,
    /// Active enemies in spawn order.
    pub active_enemies: Vec<EnemyData>,
}

impl CoreState {
    /// Fresh session state: full clock, full health, empty roster.
    pub fn initial() -> Self {
        Self {
            remaining_time: GAME_DURATION_SECS,
            current_health: MAX_HEALTH,
            maximum_health: MAX_HEALTH,
            spawn_config: SpawnConfig {
                last_spawn_time: 0.0,
                spawn_interval: INITIAL_SPAWN_INTERVAL,
                maximum_enemies: MAX_ACTIVE_ENEMIES,
            },
            active_enemies: Vec::new(),
        }
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    /// Feedback events produced since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// HUD data: health bar, clock, score line, overlay flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub current_health: f64,
    pub maximum_health: f64,
    /// Remaining session time (seconds).
    pub remaining_time: f64,
    pub score: u32,
    pub enemies_killed: u32,
    pub is_paused: bool,
    pub is_game_over: bool,
}

/// Player avatar for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A visible enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub movement_speed: f64,
}
