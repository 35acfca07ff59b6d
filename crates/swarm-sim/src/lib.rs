//! Headless simulation engine for SWARM.
//!
//! Owns the hecs ECS world, advances the session one step at a time,
//! and produces `GameStateSnapshot`s for a frontend to render.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use swarm_core as core;
