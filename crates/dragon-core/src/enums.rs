//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round state machine phase.
///
/// Path growth is tracked separately (`path_ready`) because it overlaps
/// `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between waves: no enemies, accepting `StartWave` and tower placement.
    #[default]
    Idle,
    /// Enemies spawning and combat active.
    WaveInProgress,
    /// Lives exhausted; only `Reset` is accepted.
    GameOver,
}

