//! Simulation constants and tuning parameters.

/// Frames per simulated second.
pub const TICK_RATE: u32 = 60;

/// Seconds per frame.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen / camera ---

pub const SCREEN_WIDTH: f64 = 320.0;
pub const SCREEN_HEIGHT: f64 = 240.0;

/// Padding added around the path bounding box when framing the camera.
pub const CAMERA_MARGIN: f64 = 50.0;

// --- Path ---

/// Distance between consecutive waypoints.
pub const PATH_SEGMENT_LENGTH: f64 = 25.0;

/// Segments grown synchronously on reset (path starts with 8 waypoints).
pub const INITIAL_PATH_SEGMENTS: usize = 7;

/// Target path length after a round, as a multiple of the current length.
pub const PATH_GROWTH_FACTOR: f64 = 1.6;

/// Simulated seconds a regrowth phase takes, however many segments it adds.
pub const PATH_GROWTH_DURATION: f64 = 2.0;

// --- Towers ---

/// Base attack radius, multiplied by the tower scale.
pub const TOWER_ATTACK_RANGE: f64 = 25.0;

/// Seconds between tower shots.
pub const TOWER_ATTACK_INTERVAL: f64 = 1.5;

/// Cursor distance within which a placed tower counts as hovered.
pub const TOWER_HOVER_RADIUS: f64 = 12.0;

pub const TOWER_ANIM_FRAMES: u32 = 3;
pub const TOWER_ANIM_CYCLE_SECS: f64 = 0.35;

// --- Enemies ---

pub const ENEMY_ANIM_FRAMES: u32 = 6;
pub const ENEMY_ANIM_CYCLE_SECS: f64 = 0.40;

/// Health written to a leaked enemy so the same pass treats it as gone.
pub const LEAKED_ENEMY_HEALTH: i32 = -1;

// --- Projectiles ---

pub const PROJECTILE_DAMAGE: i32 = 1;

// --- Wave escalation ---

/// Seconds over which a whole wave is spawned.
pub const WAVE_SPAWN_WINDOW: f64 = 10.0;

pub const ENEMY_SPEED_GROWTH: f64 = 1.8;

/// Projectile speed as a multiple of enemy speed after a wave starts.
pub const PROJECTILE_SPEED_RATIO: f64 = 3.0;

pub const TOWER_COST_GROWTH: f64 = 1.5;

// --- Initial economy ---

pub const INITIAL_LIVES: u32 = 10;
pub const INITIAL_CREDITS: u32 = 2;
pub const INITIAL_ENEMY_SPEED: f64 = 15.0;
pub const INITIAL_PROJECTILE_SPEED: f64 = 300.0;
pub const INITIAL_ENEMY_HEALTH: i32 = 1;
pub const INITIAL_ENEMY_BOUNTY: u32 = 1;
pub const INITIAL_TOWER_COST: u32 = 2;
pub const INITIAL_TOWER_SCALE: f64 = 1.0;
