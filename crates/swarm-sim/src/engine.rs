//! Simulation engine: the step driver at the center of the game.
//!
//! `SimulationEngine` owns the hecs world, the core state, and all policy
//! state, processes player commands at tick boundaries, runs the per-step
//! systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless; a renderer or the headless runner supplies the clock.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarm_core::commands::PlayerCommand;
use swarm_core::constants::*;
use swarm_core::enums::GamePhase;
use swarm_core::events::{CollisionEvent, GameEvent, SimEvent};
use swarm_core::reducer::reduce;
use swarm_core::state::{CoreState, EnemyData, GameStateSnapshot};
use swarm_core::types::{SimTime, Vec2};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::collision::{CollisionConfig, CollisionTracker};
use crate::systems::input::InputState;
use crate::systems::spawner::{EnemyIdCounter, SpawnDecision};
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed + same inputs = same simulation.
    pub seed: u64,
    pub arena_width: f64,
    pub arena_height: f64,
    pub collision: CollisionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            collision: CollisionConfig::default(),
        }
    }
}

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    core: CoreState,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    input: InputState,
    enemy_ids: EnemyIdCounter,
    collision: CollisionTracker,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    sim_events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine with a fresh session already active.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_arena(&mut world, config.arena_width, config.arena_height);

        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            world,
            core: CoreState::initial(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            input: InputState::default(),
            enemy_ids: EnemyIdCounter::new(),
            collision: CollisionTracker::new(),
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            sim_events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Replace the sampled directional input used by subsequent steps.
    /// Callers with multiple physical sources merge them first.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one step of `dt` seconds and return the
    /// resulting snapshot. The step only runs in the Active phase;
    /// commands are processed regardless.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_step(dt);
        }

        let events = std::mem::take(&mut self.sim_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.core,
            &self.time,
            self.phase,
            &self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the core state.
    pub fn core(&self) -> &CoreState {
        &self.core
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the collision tracker.
    #[cfg(test)]
    pub fn collision_tracker(&self) -> &CollisionTracker {
        &self.collision
    }

    /// Spawn an enemy at an arbitrary position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: Vec2, movement_speed: f64) -> u32 {
        let enemy = EnemyData {
            id: self.enemy_ids.allocate(),
            movement_speed,
        };
        world_setup::spawn_enemy(&mut self.world, enemy, position);
        self.core = reduce(&self.core, &GameEvent::Spawned { enemy });
        enemy.id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Atomically discard the session and start a fresh one between
    /// steps. The RNG stream continues where it left off; seed identity
    /// holds across whole process runs, not across restarts.
    fn restart(&mut self) {
        self.world = World::new();
        world_setup::setup_arena(
            &mut self.world,
            self.config.arena_width,
            self.config.arena_height,
        );
        self.core = CoreState::initial();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.enemy_ids.reset();
        self.collision.reset();
        self.score = ScoreState::default();
        self.sim_events.push(SimEvent::GameReset);
    }

    /// One simulation step. The order is load-bearing: clock, terminal
    /// check, input, spawn, steering, movement, collisions; buffered
    /// reducer events then apply damage-first.
    fn run_step(&mut self, dt: f64) {
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        // Hit-set maintenance runs before any new contacts this step.
        systems::collision::cleanup_recent(
            &mut self.collision,
            now,
            COLLISION_CLEANUP_THRESHOLD_SECS,
        );

        // Clock and difficulty ramp. The spawn decision below must see
        // the interval already ramped for this time bucket.
        self.core = reduce(&self.core, &GameEvent::Tick { delta_time: dt });

        if self.core.remaining_time <= 0.0 {
            self.phase = GamePhase::Victory;
            self.sim_events.push(SimEvent::GameWon);
            return;
        }

        systems::input::run(&mut self.world, &self.input);

        let mut spawn_events: Vec<GameEvent> = Vec::new();
        let mut spawn_time_events: Vec<GameEvent> = Vec::new();

        match systems::spawner::decide_spawn(now, &self.core, &mut self.enemy_ids, &mut self.rng)
        {
            SpawnDecision::Spawn {
                next_spawn_time,
                enemy,
            } => {
                let position = systems::spawner::random_edge_position(
                    &mut self.rng,
                    self.config.arena_width,
                    self.config.arena_height,
                    EDGE_SPAWN_OFFSET,
                );
                world_setup::spawn_enemy(&mut self.world, enemy, position);
                log::debug!(
                    "spawned enemy {} at ({:.1}, {:.1})",
                    enemy.id,
                    position.x,
                    position.y
                );
                self.sim_events.push(SimEvent::EnemySpawned {
                    enemy_id: enemy.id,
                    position,
                });
                spawn_events.push(GameEvent::Spawned { enemy });
                spawn_time_events.push(GameEvent::UpdateSpawnTime {
                    new_spawn_time: next_spawn_time,
                });
            }
            // The spawn clock stays untouched on this branch.
            SpawnDecision::NoSpawn { .. } => {}
        }

        let player_pos = world_setup::player_position(&self.world);
        systems::seek::run(&mut self.world, player_pos);
        systems::movement::run(&mut self.world, dt);

        let player_pos = world_setup::player_position(&self.world);
        let contacts = systems::collision::find_contacts(&self.world, player_pos);
        let results = systems::collision::resolve_collisions(
            &mut self.collision,
            &contacts,
            now,
            &self.config.collision,
            &mut self.rng,
        );

        let mut damage_events: Vec<GameEvent> = Vec::new();
        self.apply_collision_results(results, player_pos, &mut damage_events);

        // Fixed application order: damage, then spawns, then spawn-time
        // updates.
        for event in damage_events
            .iter()
            .chain(spawn_events.iter())
            .chain(spawn_time_events.iter())
        {
            self.core = reduce(&self.core, event);
        }

        if self.core.current_health <= 0.0 {
            self.phase = GamePhase::Defeat;
            self.sim_events.push(SimEvent::GameLost);
        }
    }

    /// Translate collision outcomes into world effects, score updates,
    /// feedback events, and buffered reducer events.
    fn apply_collision_results(
        &mut self,
        results: Vec<CollisionEvent>,
        player_pos: Vec2,
        damage_events: &mut Vec<GameEvent>,
    ) {
        for result in results {
            match result {
                CollisionEvent::PlayerDamaged {
                    damage_amount,
                    source_enemy_id,
                } => {
                    self.score.total_damage_taken += damage_amount;
                    log::debug!("player hit by enemy {source_enemy_id} for {damage_amount}");
                    self.sim_events.push(SimEvent::PlayerHit {
                        source_enemy_id,
                        damage_amount,
                    });
                    damage_events.push(GameEvent::Damage { damage_amount });
                }
                CollisionEvent::EnemyDestroyed {
                    destroyed_enemy_id,
                    score_points,
                } => {
                    // No mechanic produces this yet; the path is wired end
                    // to end as the extension point for a player attack.
                    let points = score_points.unwrap_or(KILL_SCORE_POINTS);
                    self.score.enemies_killed += 1;
                    self.score.score += points;
                    self.despawn_enemy(destroyed_enemy_id);
                    self.sim_events.push(SimEvent::EnemyDestroyed {
                        enemy_id: destroyed_enemy_id,
                        points,
                    });
                    damage_events.push(GameEvent::KillEnemy {
                        enemy_id: destroyed_enemy_id,
                    });
                }
                CollisionEvent::KnockbackApplied {
                    target_enemy_id,
                    knockback_force,
                } => {
                    systems::collision::apply_knockback(
                        &mut self.world,
                        player_pos,
                        target_enemy_id,
                        knockback_force,
                    );
                    self.sim_events.push(SimEvent::EnemyKnockedBack {
                        enemy_id: target_enemy_id,
                        knockback_force,
                    });
                }
            }
        }
    }

    /// Remove an enemy entity from the world by roster id.
    fn despawn_enemy(&mut self, enemy_id: u32) {
        let entity = self
            .world
            .query::<&EnemyData>()
            .iter()
            .find(|(_, enemy)| enemy.id == enemy_id)
            .map(|(entity, _)| entity);

        if let Some(entity) = entity {
            let _ = self.world.despawn(entity);
        }
    }
}
