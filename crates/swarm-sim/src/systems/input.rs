//! Directional input mapping: pressed keys to a player velocity.

use hecs::World;
use serde::{Deserialize, Serialize};

use swarm_core::components::{Player, Velocity};
use swarm_core::constants::PLAYER_MOVE_SPEED;
use swarm_core::types::Vec2;

/// Pressed state of the four directional inputs for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Combine two physical sources (letter keys and arrow keys) with a
    /// per-axis OR.
    pub fn merged(&self, other: &InputState) -> InputState {
        InputState {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }
}

/// Signed axis pair from the pressed state, normalized to unit length so
/// diagonal movement is no faster than straight movement. Zero input
/// keeps the denominator at 1 and yields the zero vector.
pub fn move_vector(input: &InputState) -> Vec2 {
    let move_x = input.right as i8 as f64 - input.left as i8 as f64;
    let move_y = input.down as i8 as f64 - input.up as i8 as f64;

    let length = (move_x * move_x + move_y * move_y).sqrt();
    let length = if length > 0.0 { length } else { 1.0 };

    Vec2::new(move_x / length, move_y / length)
}

/// Scale a unit direction into an actual velocity.
pub fn velocity_from_input(direction: Vec2, movement_speed: f64) -> Vec2 {
    direction.scaled(movement_speed)
}

/// Write the player's velocity from the sampled input.
pub fn run(world: &mut World, input: &InputState) {
    let velocity = velocity_from_input(move_vector(input), PLAYER_MOVE_SPEED);
    for (_entity, (_player, vel)) in world.query_mut::<(&Player, &mut Velocity)>() {
        vel.0 = velocity;
    }
}
