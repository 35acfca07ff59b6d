//! Event unions: reducer input, collision policy output, and the
//! per-tick feedback feed consumed by the UI/audio layer.

use serde::{Deserialize, Serialize};

use crate::state::EnemyData;
use crate::types::Vec2;

/// Events consumed by the core state reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Advance the session clock and difficulty ramp.
    Tick { delta_time: f64 },
    /// The player took damage.
    Damage { damage_amount: f64 },
    /// Discard everything and return to the initial state.
    Reset,
    /// A freshly minted enemy joined the roster.
    Spawned { enemy: EnemyData },
    /// Remove an enemy from the roster; no-op if the id is absent.
    KillEnemy { enemy_id: u32 },
    /// Move the spawn clock forward after a spawn.
    UpdateSpawnTime { new_spawn_time: f64 },
}

/// Outcomes of resolving one player-enemy contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollisionEvent {
    /// The contact got through the invulnerability window and dedup set.
    PlayerDamaged {
        damage_amount: f64,
        source_enemy_id: u32,
    },
    /// An enemy was destroyed. Nothing currently produces this; the
    /// handling path is kept as an extension point for an attack mechanic.
    EnemyDestroyed {
        destroyed_enemy_id: u32,
        score_points: Option<u32>,
    },
    /// The damaging contact also shoves the enemy away from the player.
    KnockbackApplied {
        target_enemy_id: u32,
        knockback_force: f64,
    },
}

/// Feedback events for the frontend (sound cues, floating text, log lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new enemy appeared at an arena edge.
    EnemySpawned { enemy_id: u32, position: Vec2 },
    /// The player was hit.
    PlayerHit {
        source_enemy_id: u32,
        damage_amount: f64,
    },
    /// An enemy was shoved away from the player.
    EnemyKnockedBack { enemy_id: u32, knockback_force: f64 },
    /// An enemy was destroyed.
    EnemyDestroyed { enemy_id: u32, points: u32 },
    /// The clock ran out with the player alive.
    GameWon,
    /// Player health reached zero.
    GameLost,
    /// A fresh session began.
    GameReset,
}
