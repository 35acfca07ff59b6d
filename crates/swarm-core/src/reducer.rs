//! The pure core state reducer.
//!
//! `reduce` is total over the closed event union and never panics; every
//! transition returns a new `CoreState` and leaves the input untouched.

use crate::constants::*;
use crate::events::GameEvent;
use crate::state::{CoreState, EnemyData, SpawnConfig};

/// Apply one event to the state, producing the next state.
pub fn reduce(state: &CoreState, event: &GameEvent) -> CoreState {
    match event {
        GameEvent::Tick { delta_time } => apply_tick(state, *delta_time),
        GameEvent::Damage { damage_amount } => apply_damage(state, *damage_amount),
        GameEvent::Reset => CoreState::initial(),
        GameEvent::Spawned { enemy } => apply_spawned(state, enemy),
        GameEvent::KillEnemy { enemy_id } => apply_kill_enemy(state, *enemy_id),
        GameEvent::UpdateSpawnTime { new_spawn_time } => {
            apply_spawn_time_update(state, *new_spawn_time)
        }
    }
}

/// Clock plus difficulty ramp. The interval tightens one step per
/// elapsed 10-second bucket and never drops below the floor.
fn apply_tick(state: &CoreState, delta_time: f64) -> CoreState {
    let remaining_time = (state.remaining_time - delta_time).max(0.0);
    let difficulty_level =
        ((GAME_DURATION_SECS - remaining_time) / DIFFICULTY_BUCKET_SECS).floor();
    let spawn_interval = (INITIAL_SPAWN_INTERVAL - difficulty_level * SPAWN_INTERVAL_STEP)
        .max(MIN_SPAWN_INTERVAL);

    CoreState {
        remaining_time,
        spawn_config: SpawnConfig {
            spawn_interval,
            ..state.spawn_config
        },
        ..state.clone()
    }
}

/// Health never goes negative.
fn apply_damage(state: &CoreState, damage_amount: f64) -> CoreState {
    CoreState {
        current_health: (state.current_health - damage_amount).max(0.0),
        ..state.clone()
    }
}

/// Roster order is spawn order; appends keep it stable.
fn apply_spawned(state: &CoreState, enemy: &EnemyData) -> CoreState {
    let mut active_enemies = state.active_enemies.clone();
    active_enemies.push(*enemy);
    CoreState {
        active_enemies,
        ..state.clone()
    }
}

fn apply_kill_enemy(state: &CoreState, enemy_id: u32) -> CoreState {
    let active_enemies = state
        .active_enemies
        .iter()
        .copied()
        .filter(|enemy| enemy.id != enemy_id)
        .collect();
    CoreState {
        active_enemies,
        ..state.clone()
    }
}

fn apply_spawn_time_update(state: &CoreState, new_spawn_time: f64) -> CoreState {
    CoreState {
        spawn_config: SpawnConfig {
            last_spawn_time: new_spawn_time,
            ..state.spawn_config
        },
        ..state.clone()
    }
}
