//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveStarted { wave: u32, enemies: u32 },
    WaveCleared { wave: u32, credits_awarded: u32 },
    /// Path regrowth finished; waves and placement are possible again.
    PathReady { waypoints: usize },
    /// The path bounding box grew and the camera was reframed.
    BoundsChanged { bounds: Rect },
    EnemySpawned { remaining: u32 },
    EnemyKilled { bounty: u32 },
    EnemyLeaked { lives_remaining: u32 },
    TowerPlaced { x: f64, y: f64, cost: u32 },
    ProjectileFired { x: f64, y: f64 },
    ProjectileImpact { damage: i32 },
    /// Target was gone before the projectile arrived; no damage applied.
    ProjectileFizzled,
    GameOver { wave: u32 },
}
