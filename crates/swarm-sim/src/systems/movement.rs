//! Kinematic integration: position += velocity * dt each step.

use hecs::World;

use swarm_core::components::{Position, Velocity};

/// Integrate every entity with a position and a velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0.x += vel.0.x * dt;
        pos.0.y += vel.0.y * dt;
    }
}
