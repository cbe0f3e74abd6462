//! Wave spawning system: releases the current wave's enemies one interval
//! apart, carrying leftover time across frames.

use hecs::World;

use dragon_core::events::SimEvent;
use dragon_core::types::Vec2;

use crate::economy::Economy;
use crate::world_setup;

/// Count down the spawn timer and spawn every enemy that is due.
pub fn run(world: &mut World, economy: &mut Economy, start: Vec2, dt: f64, events: &mut Vec<SimEvent>) {
    if economy.enemies_remaining == 0 {
        return;
    }

    economy.spawn_timer_secs -= dt;
    while economy.spawn_timer_secs < 0.0 && economy.enemies_remaining > 0 {
        economy.spawn_timer_secs += economy.spawn_interval_secs;
        economy.enemies_remaining -= 1;
        world_setup::spawn_enemy(world, start, economy.enemy_health);
        log::trace!(
            "wave {}: enemy spawned, {} to go",
            economy.wave,
            economy.enemies_remaining
        );
        events.push(SimEvent::EnemySpawned {
            remaining: economy.enemies_remaining,
        });
    }
}
