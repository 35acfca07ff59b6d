//! Entity spawn factories for the simulation world.

use hecs::World;

use swarm_core::components::{Player, Position, Velocity};
use swarm_core::state::EnemyData;
use swarm_core::types::Vec2;

/// Set up a fresh arena: just the player, centered.
pub fn setup_arena(world: &mut World, arena_width: f64, arena_height: f64) -> hecs::Entity {
    spawn_player(world, Vec2::new(arena_width / 2.0, arena_height / 2.0))
}

/// Spawn the player avatar at the given position.
pub fn spawn_player(world: &mut World, position: Vec2) -> hecs::Entity {
    world.spawn((Player, Position(position), Velocity::default()))
}

/// Spawn an enemy entity carrying its roster record.
pub fn spawn_enemy(world: &mut World, enemy: EnemyData, position: Vec2) -> hecs::Entity {
    world.spawn((enemy, Position(position), Velocity::default()))
}

/// Current player position; origin if the avatar is missing.
pub fn player_position(world: &World) -> Vec2 {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
        .unwrap_or_default()
}
