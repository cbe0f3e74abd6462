//! Dragon Defence headless driver.
//!
//! Runs the simulation engine on its own thread at a fixed timestep, feeds
//! it player commands over a channel, and publishes the latest snapshot.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use dragon_core as core;
