//! Tower system: cooldowns, firing, and target acquisition.
//!
//! Acquisition keeps the first in-range enemy found in collection order,
//! not the nearest one.

use hecs::{Entity, World};

use dragon_core::components::Tower;
use dragon_core::constants::*;
use dragon_core::events::SimEvent;
use dragon_core::types::Vec2;

use crate::systems::animation;
use crate::systems::enemies::{self, EnemySighting};
use crate::world_setup;

/// A projectile launch requested during the tower pass.
#[derive(Debug, Clone, Copy)]
pub struct FireOrder {
    pub origin: Vec2,
    pub scale: f64,
    pub target: Entity,
}

fn find(sightings: &[EnemySighting], entity: Entity) -> Option<&EnemySighting> {
    sightings.iter().find(|s| s.entity == entity)
}

/// Tick the cooldown and fire at the held target when ready.
///
/// The dead-target check runs after the attack decision, so a tower can
/// still fire at an enemy whose health already dropped to zero this frame.
/// A target that no longer exists fires nothing and is dropped.
pub fn update(tower: &mut Tower, sightings: &[EnemySighting], dt: f64) -> Option<FireOrder> {
    tower.cooldown_secs -= dt;
    let mut order = None;

    if let Some(target) = tower.target {
        match find(sightings, target) {
            Some(sighting) => {
                if tower.cooldown_secs <= 0.0 {
                    tower.cooldown_secs = TOWER_ATTACK_INTERVAL;
                    order = Some(FireOrder {
                        origin: tower.position,
                        scale: tower.scale,
                        target,
                    });
                }
                if sighting.health <= 0 {
                    tower.target = None;
                }
            }
            // Removed target: no shot, and the cooldown is not reset.
            None => tower.target = None,
        }
    }

    animation::step(
        &mut tower.animation,
        dt,
        TOWER_ANIM_FRAMES,
        TOWER_ANIM_CYCLE_SECS,
    );
    order
}

/// Drop an out-of-range target, then lock onto the first enemy in range.
pub fn acquire_target(tower: &mut Tower, sightings: &[EnemySighting]) {
    let radius = tower.attack_radius();

    if let Some(target) = tower.target {
        let in_range = find(sightings, target)
            .is_some_and(|s| s.position.distance(tower.position) <= radius);
        if !in_range {
            tower.target = None;
        }
    }

    if tower.target.is_none() {
        tower.target = sightings
            .iter()
            .find(|s| s.position.distance(tower.position) < radius)
            .map(|s| s.entity);
    }
}

/// Run every tower, then launch the projectiles they asked for.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<SimEvent>) {
    let sightings = enemies::sightings(world);
    let mut orders = Vec::new();

    for (_entity, tower) in world.query_mut::<&mut Tower>() {
        if let Some(order) = update(tower, &sightings, dt) {
            orders.push(order);
        }
        acquire_target(tower, &sightings);
    }

    for order in orders {
        world_setup::spawn_projectile(world, order.origin, order.scale, order.target);
        events.push(SimEvent::ProjectileFired {
            x: order.origin.x,
            y: order.origin.y,
        });
    }
}
