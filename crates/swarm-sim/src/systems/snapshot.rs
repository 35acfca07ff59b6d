//! Snapshot system: queries the world and builds a GameStateSnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use swarm_core::components::{Player, Position, Velocity};
use swarm_core::enums::GamePhase;
use swarm_core::events::SimEvent;
use swarm_core::state::{CoreState, EnemyData, EnemyView, GameStateSnapshot, HudView, PlayerView};
use swarm_core::types::SimTime;

use crate::score::ScoreState;

/// Build a complete snapshot from the current world and core state.
pub fn build_snapshot(
    world: &World,
    core: &CoreState,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            current_health: core.current_health,
            maximum_health: core.maximum_health,
            remaining_time: core.remaining_time,
            score: score.score,
            enemies_killed: score.enemies_killed,
            is_paused: phase == GamePhase::Paused,
            is_game_over: phase.is_terminal(),
        },
        player: build_player(world),
        enemies: build_enemies(world),
        events,
    }
}

/// Player view; defaults if the avatar is missing.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel))| PlayerView {
            position: pos.0,
            velocity: vel.0,
        })
        .unwrap_or_default()
}

/// Enemy views in id (spawn) order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyData, &Position, &Velocity)>()
        .iter()
        .map(|(_, (enemy, pos, vel))| EnemyView {
            id: enemy.id,
            position: pos.0,
            velocity: vel.0,
            movement_speed: enemy.movement_speed,
        })
        .collect();

    enemies.sort_by_key(|enemy| enemy.id);
    enemies
}
