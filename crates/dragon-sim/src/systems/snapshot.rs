//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use dragon_core::components::*;
use dragon_core::enums::GamePhase;
use dragon_core::events::SimEvent;
use dragon_core::state::*;
use dragon_core::types::SimTime;

use crate::camera::Camera;
use crate::economy::Economy;
use crate::path::PathGenerator;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    path: &PathGenerator,
    path_ready: bool,
    camera: &Camera,
    ghost: &GhostTower,
    lost_on_wave: Option<u32>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        economy: EconomyView {
            lives: economy.lives,
            credits: economy.credits,
            wave: economy.wave,
            enemies_per_wave: economy.enemies_per_wave,
            enemies_remaining: economy.enemies_remaining,
        },
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        waypoints: path.waypoints().to_vec(),
        path_bounds: path.bounds(),
        camera: camera.view,
        ghost: GhostView {
            position: ghost.position,
            scale: ghost.scale,
            cost: ghost.cost,
            attack_range: ghost.attack_range,
            visible: ghost.visible,
            can_afford: economy.credits >= ghost.cost,
        },
        path_ready,
        lost_on_wave,
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<&Enemy>()
        .iter()
        .map(|(_, enemy)| EnemyView {
            position: enemy.position,
            health: enemy.health,
            anim_frame: enemy.animation.frame,
        })
        .collect()
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .query::<&Tower>()
        .iter()
        .map(|(_, tower)| tower_view(tower))
        .collect()
}

pub fn tower_view(tower: &Tower) -> TowerView {
    TowerView {
        position: tower.position,
        scale: tower.scale,
        anim_frame: tower.animation.frame,
        attack_range: tower.attack_range,
        has_target: tower.target.is_some(),
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<&Projectile>()
        .iter()
        .map(|(_, projectile)| ProjectileView {
            position: projectile.position,
            scale: projectile.scale,
            rotation: projectile.rotation,
        })
        .collect()
}
