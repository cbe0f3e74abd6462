//! Simulation engine for Dragon Defence.
//!
//! Owns the hecs ECS world, grows the path, runs the entity systems at a
//! fixed timestep, and produces GameStateSnapshots for the frontend.

pub mod camera;
pub mod economy;
pub mod engine;
pub mod error;
pub mod path;
pub mod systems;
pub mod world_setup;

pub use dragon_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::CommandError;
