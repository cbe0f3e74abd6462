//! Player commands translated from raw input by the frontend.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Round control ---
    /// Begin the next wave.
    StartWave,

    // --- Tower placement ---
    /// Show or hide the placement preview.
    ToggleTowerPlacementCursor,
    /// Move the placement preview to a world position.
    MoveCursor { x: f64, y: f64 },
    /// Place a tower at a world position (reveals the preview if hidden).
    PlaceTower { x: f64, y: f64 },

    // --- Session ---
    /// Rebuild the game from scratch. Only valid once lives reach zero.
    Reset,
    /// Ask the driver to stop.
    Quit,
}
