//! Entity spawn factories.

use hecs::{Entity, World};

use dragon_core::components::*;
use dragon_core::constants::*;
use dragon_core::types::Vec2;

/// Spawn an enemy at the start of the path.
pub fn spawn_enemy(world: &mut World, start: Vec2, health: i32) -> Entity {
    world.spawn((Enemy {
        health,
        position: start,
        next_waypoint: 0,
        animation: Animation::default(),
    },))
}

/// Spawn a tower from the placement template at `position`.
pub fn spawn_tower(world: &mut World, ghost: &GhostTower, position: Vec2) -> Entity {
    world.spawn((Tower {
        position,
        scale: ghost.scale,
        cost: ghost.cost,
        attack_range: ghost.attack_range,
        cooldown_secs: 0.0,
        target: None,
        animation: Animation::default(),
    },))
}

/// Spawn a projectile at a tower, homing on `target`.
pub fn spawn_projectile(world: &mut World, origin: Vec2, scale: f64, target: Entity) -> Entity {
    world.spawn((Projectile {
        position: origin,
        scale,
        damage: PROJECTILE_DAMAGE,
        target,
        rotation: 0.0,
        dead: false,
    },))
}

/// Placement template as it is after a reset.
pub fn initial_ghost_tower() -> GhostTower {
    GhostTower {
        position: Vec2::ZERO,
        scale: INITIAL_TOWER_SCALE,
        cost: INITIAL_TOWER_COST,
        attack_range: TOWER_ATTACK_RANGE,
        visible: true,
    }
}
