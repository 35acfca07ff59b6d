//! Collision and damage resolution.
//!
//! Contact detection is a circle-proximity check against the player;
//! resolution runs each contact through the invulnerability window and
//! the per-enemy dedup set, then rolls for knockback.

use std::collections::HashSet;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::components::{Position, Velocity};
use swarm_core::constants::*;
use swarm_core::events::CollisionEvent;
use swarm_core::state::EnemyData;
use swarm_core::types::Vec2;

/// Collision policy parameters.
#[derive(Debug, Clone, Copy)]
pub struct CollisionConfig {
    pub player_damage_per_hit: f64,
    pub player_invulnerability_secs: f64,
    pub knockback_chance: f64,
    pub knockback_force: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            player_damage_per_hit: PLAYER_DAMAGE_PER_HIT,
            player_invulnerability_secs: PLAYER_INVULNERABILITY_SECS,
            knockback_chance: ENEMY_KNOCKBACK_CHANCE,
            knockback_force: KNOCKBACK_FORCE,
        }
    }
}

/// Shared hit-cooldown state, owned by the engine for the session's
/// lifetime and reset on restart.
///
/// `last_player_hit_time` starts at 0, so the first half second of a
/// fresh session counts as invulnerable.
#[derive(Debug, Clone, Default)]
pub struct CollisionTracker {
    /// Game time of the last contact that damaged the player.
    pub last_player_hit_time: f64,
    /// Enemies that already landed a hit in the current cooldown window.
    pub recently_hit: HashSet<u32>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the tracker for a fresh session.
    pub fn reset(&mut self) {
        self.last_player_hit_time = 0.0;
        self.recently_hit.clear();
    }

    fn is_player_invulnerable(&self, now: f64, config: &CollisionConfig) -> bool {
        now - self.last_player_hit_time < config.player_invulnerability_secs
    }
}

/// Resolve one player-enemy contact. Returns 0-2 events, damage first.
pub fn resolve_collision(
    tracker: &mut CollisionTracker,
    enemy: &EnemyData,
    now: f64,
    config: &CollisionConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<CollisionEvent> {
    let mut results = Vec::new();

    if tracker.is_player_invulnerable(now, config) {
        return results;
    }

    if tracker.recently_hit.contains(&enemy.id) {
        return results;
    }

    results.push(CollisionEvent::PlayerDamaged {
        damage_amount: config.player_damage_per_hit,
        source_enemy_id: enemy.id,
    });

    tracker.last_player_hit_time = now;
    tracker.recently_hit.insert(enemy.id);

    if rng.gen_bool(config.knockback_chance) {
        results.push(CollisionEvent::KnockbackApplied {
            target_enemy_id: enemy.id,
            knockback_force: config.knockback_force,
        });
    }

    results
}

/// Resolve a batch of contacts from one overlap pass, in input order.
/// Every contact sees the same `now`; the tracker mutates between
/// entries, so the first damaging contact opens the invulnerability
/// window for the rest of the batch.
pub fn resolve_collisions(
    tracker: &mut CollisionTracker,
    enemies: &[EnemyData],
    now: f64,
    config: &CollisionConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<CollisionEvent> {
    let mut all_results = Vec::new();
    for enemy in enemies {
        all_results.extend(resolve_collision(tracker, enemy, now, config, rng));
    }
    all_results
}

/// Clear the recently-hit set once the player has gone `threshold`
/// seconds without being hit. The driver calls this once per step.
pub fn cleanup_recent(tracker: &mut CollisionTracker, now: f64, threshold: f64) {
    if now - tracker.last_player_hit_time > threshold {
        tracker.recently_hit.clear();
    }
}

/// Enemies currently overlapping the player, sorted by id so batch
/// resolution sees a stable order.
pub fn find_contacts(world: &World, player_position: Vec2) -> Vec<EnemyData> {
    let contact_range = PLAYER_RADIUS + ENEMY_RADIUS;

    let mut contacts: Vec<EnemyData> = world
        .query::<(&EnemyData, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.0.distance_to(&player_position) <= contact_range)
        .map(|(_, (enemy, _))| *enemy)
        .collect();

    contacts.sort_by_key(|enemy| enemy.id);
    contacts
}

/// Shove an enemy directly away from the player at `force` px/s. The
/// next step's steering overrides it: a one-step impulse.
pub fn apply_knockback(world: &mut World, player_position: Vec2, enemy_id: u32, force: f64) {
    for (_entity, (enemy, pos, vel)) in
        world.query_mut::<(&EnemyData, &Position, &mut Velocity)>()
    {
        if enemy.id != enemy_id {
            continue;
        }
        let delta_x = pos.0.x - player_position.x;
        let delta_y = pos.0.y - player_position.y;
        let distance = (delta_x * delta_x + delta_y * delta_y).sqrt();
        let distance = if distance > 0.0 { distance } else { 1.0 };
        vel.0 = Vec2::new(delta_x / distance * force, delta_y / distance * force);
    }
}
