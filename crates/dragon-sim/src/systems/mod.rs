//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Counters and timers they need are passed in from the engine.

pub mod animation;
pub mod enemies;
pub mod path_growth;
pub mod projectiles;
pub mod snapshot;
pub mod towers;
pub mod wave_spawner;
