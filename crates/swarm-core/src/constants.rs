//! Simulation constants and tuning parameters.

/// Nominal step rate for real-time drivers (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 960.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 540.0;

/// Collision radius of the player avatar (pixels).
pub const PLAYER_RADIUS: f64 = 16.0;

/// Collision radius of an enemy (pixels).
pub const ENEMY_RADIUS: f64 = 10.0;

// --- Session clock & difficulty ramp ---

/// Session length in seconds; surviving this long is a win.
pub const GAME_DURATION_SECS: f64 = 60.0;

/// Elapsed seconds per difficulty level.
pub const DIFFICULTY_BUCKET_SECS: f64 = 10.0;

/// Spawn interval at difficulty level 0 (seconds).
pub const INITIAL_SPAWN_INTERVAL: f64 = 0.7;

/// Spawn interval reduction per difficulty level (seconds).
pub const SPAWN_INTERVAL_STEP: f64 = 0.03;

/// Hard floor for the spawn interval (seconds).
pub const MIN_SPAWN_INTERVAL: f64 = 0.5;

// --- Player ---

/// Player health at session start.
pub const MAX_HEALTH: f64 = 100.0;

/// Player movement speed (pixels per second).
pub const PLAYER_MOVE_SPEED: f64 = 200.0;

// --- Enemies ---

/// Maximum simultaneous enemies in the roster.
pub const MAX_ACTIVE_ENEMIES: usize = 80;

/// Minimum enemy movement speed (pixels per second).
pub const ENEMY_BASE_SPEED: f64 = 80.0;

/// Width of the uniform random addition on top of the base speed.
pub const ENEMY_SPEED_VARIATION: f64 = 40.0;

/// Distance outside the arena boundary at which enemies appear (pixels).
pub const EDGE_SPAWN_OFFSET: f64 = 20.0;

// --- Collision / damage ---

/// Damage dealt to the player per enemy contact.
pub const PLAYER_DAMAGE_PER_HIT: f64 = 10.0;

/// Seconds of invulnerability after the player is hit.
pub const PLAYER_INVULNERABILITY_SECS: f64 = 0.5;

/// Probability that a damaging contact also knocks the enemy back.
pub const ENEMY_KNOCKBACK_CHANCE: f64 = 0.1;

/// Knockback impulse magnitude (pixels per second).
pub const KNOCKBACK_FORCE: f64 = 150.0;

/// Seconds after the last hit before the recently-hit set is cleared.
pub const COLLISION_CLEANUP_THRESHOLD_SECS: f64 = 2.0;

// --- Score ---

/// Points awarded per destroyed enemy.
pub const KILL_SCORE_POINTS: u32 = 100;
