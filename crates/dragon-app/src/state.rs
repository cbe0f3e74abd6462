//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use dragon_core::commands::PlayerCommand;
use dragon_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop paces itself and when it stops on its own.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Sleep between ticks to match wall-clock time.
    pub realtime: bool,
    /// Stop after this many ticks.
    pub max_frames: Option<u64>,
    /// Let the built-in autopilot place towers and start waves.
    pub autopilot: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            realtime: false,
            max_frames: None,
            autopilot: true,
        }
    }
}

/// Handles owned by the driver while the loop runs.
pub struct LoopHandles {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

/// End-of-run report printed by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub wave: u32,
    pub lives: u32,
    pub credits: u32,
    pub towers: usize,
    pub waypoints: usize,
    pub lost_on_wave: Option<u32>,
}

impl RunSummary {
    /// `frames` is the loop thread's own count. The snapshot's tick restarts
    /// at zero on every reset.
    pub fn from_snapshot(snapshot: &GameStateSnapshot, frames: u64) -> Self {
        Self {
            frames,
            wave: snapshot.economy.wave,
            lives: snapshot.economy.lives,
            credits: snapshot.economy.credits,
            towers: snapshot.towers.len(),
            waypoints: snapshot.waypoints.len(),
            lost_on_wave: snapshot.lost_on_wave,
        }
    }
}
