//! Spawn policy: decides when a new enemy joins, mints its roster record,
//! and picks an off-screen edge position for it.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::constants::{ENEMY_BASE_SPEED, ENEMY_SPEED_VARIATION};
use swarm_core::enums::ScreenEdge;
use swarm_core::state::{CoreState, EnemyData};
use swarm_core::types::Vec2;

/// Monotonic enemy id allocator, owned by the engine and reset on restart.
#[derive(Debug, Clone)]
pub struct EnemyIdCounter {
    next_id: u32,
}

impl EnemyIdCounter {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart numbering from 1.
    pub fn reset(&mut self) {
        self.next_id = 1;
    }
}

impl Default for EnemyIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one spawn-policy evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnDecision {
    /// Nothing spawns and the spawn clock is untouched. The caller must
    /// not emit a spawn-time update on this branch.
    NoSpawn { next_spawn_time: f64 },
    /// Spawn this enemy and move the clock to `next_spawn_time`.
    Spawn {
        next_spawn_time: f64,
        enemy: EnemyData,
    },
}

/// Evaluate the spawn policy for the current step.
///
/// Ordering contract: the caller applies this step's clock tick (and with
/// it the difficulty ramp) before calling, so `spawn_interval` is already
/// the one in effect for the current time bucket.
pub fn decide_spawn(
    now: f64,
    state: &CoreState,
    ids: &mut EnemyIdCounter,
    rng: &mut ChaCha8Rng,
) -> SpawnDecision {
    let spawn_config = &state.spawn_config;

    if state.active_enemies.len() >= spawn_config.maximum_enemies {
        return SpawnDecision::NoSpawn {
            next_spawn_time: spawn_config.last_spawn_time,
        };
    }

    if now >= spawn_config.last_spawn_time {
        let enemy = EnemyData {
            id: ids.allocate(),
            movement_speed: ENEMY_BASE_SPEED + rng.gen_range(0.0..ENEMY_SPEED_VARIATION),
        };

        return SpawnDecision::Spawn {
            next_spawn_time: now + spawn_config.spawn_interval,
            enemy,
        };
    }

    SpawnDecision::NoSpawn {
        next_spawn_time: spawn_config.last_spawn_time,
    }
}

/// Pick a point just outside one of the four arena edges, uniformly: the
/// chosen axis sits exactly `edge_offset` outside the boundary, the
/// perpendicular coordinate is uniform over the edge's span.
pub fn random_edge_position(
    rng: &mut ChaCha8Rng,
    arena_width: f64,
    arena_height: f64,
    edge_offset: f64,
) -> Vec2 {
    let edge = match rng.gen_range(0..4u8) {
        0 => ScreenEdge::Left,
        1 => ScreenEdge::Right,
        2 => ScreenEdge::Top,
        3 => ScreenEdge::Bottom,
        other => {
            log::warn!("invalid edge selection {other}, falling back to the left edge");
            ScreenEdge::Left
        }
    };

    match edge {
        ScreenEdge::Left => Vec2::new(-edge_offset, rng.gen_range(0.0..arena_height)),
        ScreenEdge::Right => Vec2::new(arena_width + edge_offset, rng.gen_range(0.0..arena_height)),
        ScreenEdge::Top => Vec2::new(rng.gen_range(0.0..arena_width), -edge_offset),
        ScreenEdge::Bottom => {
            Vec2::new(rng.gen_range(0.0..arena_width), arena_height + edge_offset)
        }
    }
}
