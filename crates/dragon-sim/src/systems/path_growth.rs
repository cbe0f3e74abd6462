//! Path growth system: extends the path between rounds and reframes the
//! camera whenever the bounding box grows.

use dragon_core::components::GhostTower;
use dragon_core::events::SimEvent;

use crate::camera::Camera;
use crate::path::{PathGenerator, PathGrowth};

/// Grow one segment and apply the camera/tower-scale coupling.
///
/// Before the first wave the camera is reframed without touching the tower
/// template, so the opening layout sets the baseline scale.
pub fn grow_segment(
    path: &mut PathGenerator,
    camera: &mut Camera,
    ghost: &mut GhostTower,
    wave: u32,
    events: &mut Vec<SimEvent>,
) {
    if let Some(bounds) = path.grow_one_segment() {
        let factor = camera.frame(&bounds);
        if wave > 0 {
            ghost.scale *= factor;
        }
        events.push(SimEvent::BoundsChanged { bounds });
    }
}

/// Consume this frame's time, adding a segment every `interval_secs`.
#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &mut PathGenerator,
    growth: &mut PathGrowth,
    camera: &mut Camera,
    ghost: &mut GhostTower,
    wave: u32,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    if growth.ready {
        return;
    }

    if path.len() < growth.target_len {
        growth.timer_secs -= dt;
        while growth.timer_secs <= 0.0 && path.len() < growth.target_len {
            grow_segment(path, camera, ghost, wave, events);
            growth.timer_secs += growth.interval_secs;
        }
    }

    if path.len() >= growth.target_len {
        growth.ready = true;
        log::debug!("path ready at {} waypoints", path.len());
        events.push(SimEvent::PathReady {
            waypoints: path.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::initial_ghost_tower;
    use dragon_core::constants::DT;
    use dragon_core::types::Vec2;

    fn setup() -> (PathGenerator, Camera, GhostTower) {
        let mut path = PathGenerator::default();
        let mut camera = Camera::new(Vec2::new(320.0, 240.0));
        let mut ghost = initial_ghost_tower();
        let mut events = Vec::new();
        for _ in 0..7 {
            grow_segment(&mut path, &mut camera, &mut ghost, 0, &mut events);
        }
        (path, camera, ghost)
    }

    #[test]
    fn test_no_scale_change_before_first_wave() {
        let (_, _, ghost) = setup();
        assert_eq!(ghost.scale, 1.0);
    }

    #[test]
    fn test_regrowth_takes_two_seconds() {
        let (mut path, mut camera, mut ghost) = setup();
        let mut growth = PathGrowth::begin(path.len());
        let mut events = Vec::new();

        let mut frames = 0;
        while !growth.ready {
            run(&mut path, &mut growth, &mut camera, &mut ghost, 1, DT, &mut events);
            frames += 1;
            assert!(frames < 1000, "growth never finished");
        }
        assert_eq!(path.len(), 12);
        // First segment lands on frame 1, the last one 1.5 s later.
        assert!((89..=93).contains(&frames), "finished after {frames} frames");
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, SimEvent::PathReady { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_large_frame_never_overshoots_target() {
        let (mut path, mut camera, mut ghost) = setup();
        let mut growth = PathGrowth::begin(path.len());
        let mut events = Vec::new();
        run(&mut path, &mut growth, &mut camera, &mut ghost, 1, 10.0, &mut events);
        assert!(growth.ready);
        assert_eq!(path.len(), growth.target_len);
    }

    #[test]
    fn test_scale_grows_with_bounds_after_first_wave() {
        let (mut path, mut camera, mut ghost) = setup();
        let mut growth = PathGrowth::begin(path.len());
        let mut events = Vec::new();
        run(&mut path, &mut growth, &mut camera, &mut ghost, 1, 10.0, &mut events);
        assert!(events
            .iter()
            .any(|e| matches!(e, SimEvent::BoundsChanged { .. })));
        assert!(ghost.scale > 1.0, "scale was {}", ghost.scale);
    }
}
