//! ECS components for hecs entities.
//!
//! Components are plain data. The per-entity update rules live in the
//! simulation crate's systems.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Looping sprite animation driven by simulated time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u32,
    /// Seconds left before advancing to the next frame.
    pub frame_remaining_secs: f64,
}

/// An enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Removed once this drops to zero or below.
    pub health: i32,
    pub position: Vec2,
    /// Index of the waypoint being walked toward. Equal to the waypoint
    /// count once the enemy has reached the end of the path.
    pub next_waypoint: usize,
    pub animation: Animation,
}

/// A placed tower.
#[derive(Debug, Clone)]
pub struct Tower {
    pub position: Vec2,
    /// Multiplies both attack range and sprite size.
    pub scale: f64,
    /// Credits paid when placed.
    pub cost: u32,
    /// Base attack radius before scaling.
    pub attack_range: f64,
    pub cooldown_secs: f64,
    /// Non-owning handle to the enemy being attacked.
    pub target: Option<hecs::Entity>,
    pub animation: Animation,
}

impl Tower {
    /// Attack radius after scaling.
    pub fn attack_radius(&self) -> f64 {
        self.attack_range * self.scale
    }
}

/// A homing projectile fired by a tower.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec2,
    pub scale: f64,
    pub damage: i32,
    /// Non-owning handle to the enemy this projectile homes on.
    pub target: hecs::Entity,
    /// Heading in radians, for rendering.
    pub rotation: f64,
    pub dead: bool,
}

/// Placement preview supplying the prototype scale, cost and range for the
/// next tower. Never spawned into the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostTower {
    /// Follows the cursor.
    pub position: Vec2,
    pub scale: f64,
    pub cost: u32,
    pub attack_range: f64,
    pub visible: bool,
}
