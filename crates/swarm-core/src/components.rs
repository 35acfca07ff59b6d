//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; systems operate
//! on them. `EnemyData` from `state` is attached verbatim as the enemy
//! entity's roster component.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Position component (arena pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity component (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Marks the player avatar entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;
