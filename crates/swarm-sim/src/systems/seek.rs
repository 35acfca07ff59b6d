//! Seek steering: each enemy's velocity points straight at the player.

use hecs::World;

use swarm_core::components::{Position, Velocity};
use swarm_core::state::EnemyData;
use swarm_core::types::Vec2;

/// Velocity that carries an entity at `movement_speed` directly toward
/// `target`. Coincident positions are treated as distance 1, which keeps
/// the result finite (near-zero velocity, never NaN).
pub fn seek_velocity(position: Vec2, movement_speed: f64, target: Vec2) -> Vec2 {
    let delta_x = target.x - position.x;
    let delta_y = target.y - position.y;

    let distance = (delta_x * delta_x + delta_y * delta_y).sqrt();
    let distance = if distance > 0.0 { distance } else { 1.0 };

    Vec2::new(
        delta_x / distance * movement_speed,
        delta_y / distance * movement_speed,
    )
}

/// Re-steer every enemy toward the player. No smoothing or inertia: the
/// velocity is a pure function of the current positions.
pub fn run(world: &mut World, player_position: Vec2) {
    for (_entity, (enemy, pos, vel)) in
        world.query_mut::<(&EnemyData, &Position, &mut Velocity)>()
    {
        vel.0 = seek_velocity(pos.0, enemy.movement_speed, player_position);
    }
}
