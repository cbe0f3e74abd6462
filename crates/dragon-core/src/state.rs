//! Game state snapshot: the complete visible state handed to the frontend
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{Rect, SimTime, Vec2};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub economy: EconomyView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub waypoints: Vec<Vec2>,
    pub path_bounds: Rect,
    pub camera: Rect,
    pub ghost: GhostView,
    /// False while the path is regrowing after a round.
    pub path_ready: bool,
    /// Wave on which the game was lost, when it has been.
    pub lost_on_wave: Option<u32>,
    pub events: Vec<SimEvent>,
}

impl GameStateSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// No enemies on the field and none left to spawn.
    pub fn awaiting_wave(&self) -> bool {
        self.enemies.is_empty() && self.economy.enemies_remaining == 0
    }
}

/// Counters shown on the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub lives: u32,
    pub credits: u32,
    pub wave: u32,
    pub enemies_per_wave: u32,
    /// Enemies of the current wave not yet spawned.
    pub enemies_remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub health: i32,
    pub anim_frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Vec2,
    pub scale: f64,
    pub anim_frame: u32,
    /// Base attack range; the effective radius is `attack_radius()`.
    pub attack_range: f64,
    pub has_target: bool,
}

impl TowerView {
    pub fn attack_radius(&self) -> f64 {
        self.attack_range * self.scale
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub scale: f64,
    pub rotation: f64,
}

/// Placement preview state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhostView {
    pub position: Vec2,
    pub scale: f64,
    pub cost: u32,
    pub attack_range: f64,
    pub visible: bool,
    /// Current credits cover the cost (selects the preview sprite).
    pub can_afford: bool,
}
