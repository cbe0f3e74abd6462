//! Scripted player that stands in for keyboard and mouse input.
//!
//! Reads the latest snapshot and answers with the commands a simple player
//! would issue: buy towers beside the path, start the next wave when the
//! field is clear, and quit once the game is lost.

use dragon_core::commands::PlayerCommand;
use dragon_core::constants::{PATH_SEGMENT_LENGTH, TOWER_HOVER_RADIUS};
use dragon_core::enums::GamePhase;
use dragon_core::state::GameStateSnapshot;
use dragon_core::types::{direction_to, rotate_cw, Vec2};

/// Commands to issue in response to `snapshot`.
pub fn decide(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    if snapshot.phase == GamePhase::GameOver {
        return vec![PlayerCommand::Quit];
    }

    let mut commands = Vec::new();
    if snapshot.path_ready && snapshot.ghost.can_afford {
        if let Some(spot) = next_tower_spot(snapshot) {
            if !snapshot.ghost.visible {
                commands.push(PlayerCommand::ToggleTowerPlacementCursor);
            }
            commands.push(PlayerCommand::PlaceTower {
                x: spot.x,
                y: spot.y,
            });
        }
    }
    if snapshot.phase == GamePhase::Idle && snapshot.path_ready && snapshot.awaiting_wave() {
        commands.push(PlayerCommand::StartWave);
    }
    commands
}

/// First free spot beside a segment, walking the path from its start.
///
/// Each spot sits half a segment off the midpoint, on the clockwise side.
pub fn next_tower_spot(snapshot: &GameStateSnapshot) -> Option<Vec2> {
    snapshot
        .waypoints
        .windows(2)
        .map(|pair| {
            let midpoint = (pair[0] + pair[1]) / 2.0;
            let side = rotate_cw(direction_to(pair[0], pair[1]));
            midpoint + side * (PATH_SEGMENT_LENGTH / 2.0)
        })
        .find(|spot| {
            snapshot
                .towers
                .iter()
                .all(|tower| tower.position.distance(*spot) > TOWER_HOVER_RADIUS)
        })
}
