//! Projectile system: homing flight and impact.
//!
//! Damage is collected during the pass and applied to enemies afterwards,
//! so each projectile hits at most once.

use hecs::{Entity, World};

use dragon_core::components::{Enemy, Projectile};
use dragon_core::events::SimEvent;
use dragon_core::types::{direction_to, Vec2};

use crate::systems::enemies;

/// What happened to a projectile this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOutcome {
    InFlight,
    /// Reached the target; carries the damage to apply.
    Impact(i32),
    /// Target no longer exists.
    Fizzled,
}

/// Move `projectile` toward the target's current position.
///
/// `target_position` is `None` when the target has been removed.
pub fn update(
    projectile: &mut Projectile,
    target_position: Option<Vec2>,
    speed: f64,
    dt: f64,
) -> ProjectileOutcome {
    if projectile.dead {
        return ProjectileOutcome::InFlight;
    }
    let Some(target) = target_position else {
        projectile.dead = true;
        return ProjectileOutcome::Fizzled;
    };

    let step = speed * dt;
    let offset = target - projectile.position;
    if offset.length() > step {
        projectile.rotation = offset.y.atan2(offset.x);
        projectile.position += direction_to(projectile.position, target) * step;
        ProjectileOutcome::InFlight
    } else {
        projectile.dead = true;
        ProjectileOutcome::Impact(projectile.damage)
    }
}

/// Fly every projectile, apply hits, then despawn the dead ones.
pub fn run(
    world: &mut World,
    speed: f64,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();
    let sightings = enemies::sightings(world);
    let mut hits: Vec<(Entity, i32)> = Vec::new();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        let target_position = sightings
            .iter()
            .find(|s| s.entity == projectile.target)
            .map(|s| s.position);

        match update(projectile, target_position, speed, dt) {
            ProjectileOutcome::InFlight => {}
            ProjectileOutcome::Impact(damage) => {
                hits.push((projectile.target, damage));
                events.push(SimEvent::ProjectileImpact { damage });
            }
            ProjectileOutcome::Fizzled => events.push(SimEvent::ProjectileFizzled),
        }
        if projectile.dead {
            despawn_buffer.push(entity);
        }
    }

    for (target, damage) in hits {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
            enemy.health -= damage;
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
