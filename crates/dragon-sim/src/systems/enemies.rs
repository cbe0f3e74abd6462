//! Enemy system: walks enemies along the path, pays bounties for kills,
//! and charges lives for leaks.

use hecs::{Entity, World};

use dragon_core::components::Enemy;
use dragon_core::constants::*;
use dragon_core::events::SimEvent;
use dragon_core::types::{direction_to, Vec2};

use crate::economy::Economy;
use crate::systems::animation;

/// Position and health of a live enemy, in collection order.
#[derive(Debug, Clone, Copy)]
pub struct EnemySighting {
    pub entity: Entity,
    pub position: Vec2,
    pub health: i32,
}

/// Collect every enemy in the world's iteration order.
pub fn sightings(world: &World) -> Vec<EnemySighting> {
    world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| EnemySighting {
            entity,
            position: enemy.position,
            health: enemy.health,
        })
        .collect()
}

/// Walk `enemy` toward its next waypoint for `dt` seconds.
///
/// Arriving at a waypoint snaps onto it exactly and carries the unused time
/// toward the next one, so the result does not depend on how `dt` is split.
pub fn advance(enemy: &mut Enemy, waypoints: &[Vec2], speed: f64, dt: f64) {
    let mut remaining_secs = dt;
    while remaining_secs > 0.0 && enemy.next_waypoint < waypoints.len() {
        let target = waypoints[enemy.next_waypoint];
        let move_dist = speed * remaining_secs;
        let dist = enemy.position.distance(target);
        if dist > move_dist {
            enemy.position += direction_to(enemy.position, target) * move_dist;
            remaining_secs = 0.0;
        } else {
            enemy.position = target;
            enemy.next_waypoint += 1;
            remaining_secs -= dist / speed;
        }
    }
}

/// Whether the enemy has walked past the last waypoint.
pub fn has_leaked(enemy: &Enemy, waypoint_count: usize) -> bool {
    enemy.next_waypoint >= waypoint_count
}

/// Move every enemy, then despawn the dead and the leaked.
///
/// Returns true when a leak used up the last life.
pub fn run(
    world: &mut World,
    waypoints: &[Vec2],
    economy: &mut Economy,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> bool {
    despawn_buffer.clear();
    let mut lives_exhausted = false;

    for (entity, enemy) in world.query_mut::<&mut Enemy>() {
        advance(enemy, waypoints, economy.enemy_speed, dt);
        animation::step(
            &mut enemy.animation,
            dt,
            ENEMY_ANIM_FRAMES,
            ENEMY_ANIM_CYCLE_SECS,
        );

        if enemy.health <= 0 {
            economy.credits += economy.enemy_bounty;
            events.push(SimEvent::EnemyKilled {
                bounty: economy.enemy_bounty,
            });
            despawn_buffer.push(entity);
            continue;
        }

        if has_leaked(enemy, waypoints.len()) {
            lives_exhausted |= economy.leak();
            enemy.health = LEAKED_ENEMY_HEALTH;
            events.push(SimEvent::EnemyLeaked {
                lives_remaining: economy.lives,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    lives_exhausted
}
