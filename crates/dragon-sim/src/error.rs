//! Reasons a player command is refused.

use std::fmt;

/// A command that does not apply in the current game state.
///
/// Refusals are part of normal play, not failures of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Enemies are still on the field or waiting to spawn.
    WaveActive,
    /// The path is regrowing after a round.
    PathGrowing,
    /// Lives are exhausted; only a reset is accepted.
    GameOver,
    /// Reset was requested while lives remain.
    GameNotOver,
    InsufficientCredits { credits: u32, cost: u32 },
    /// The placement preview was hidden; it is now shown instead.
    CursorHidden,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::WaveActive => write!(f, "a wave is still in progress"),
            CommandError::PathGrowing => write!(f, "the path is still growing"),
            CommandError::GameOver => write!(f, "the game is over"),
            CommandError::GameNotOver => write!(f, "reset is only allowed after the game is lost"),
            CommandError::InsufficientCredits { credits, cost } => {
                write!(f, "tower costs {cost} credits but only {credits} available")
            }
            CommandError::CursorHidden => write!(f, "placement cursor was hidden"),
        }
    }
}

impl std::error::Error for CommandError {}
