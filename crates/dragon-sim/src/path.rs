//! Procedural path: a dragon-curve walk of fixed-length segments.
//!
//! The turn after step `n` is decided by the lowest set bit of `n`, so the
//! same starting direction always produces the same path.

use dragon_core::constants::*;
use dragon_core::types::{rotate_ccw, rotate_cw, Rect, Vec2};

/// Direction of the first segment.
pub const PATH_START_DIRECTION: Vec2 = Vec2::new(-1.0, 0.0);

/// True when the dragon-curve turn after step `index` is clockwise.
///
/// `index` starts at 1.
pub fn turns_clockwise(index: u64) -> bool {
    let low_mask = index ^ (index - 1);
    index & low_mask.wrapping_add(1) == 0
}

/// Append-only waypoint generator.
#[derive(Debug, Clone)]
pub struct PathGenerator {
    waypoints: Vec<Vec2>,
    end_location: Vec2,
    direction: Vec2,
    step_index: u64,
    bounds: Rect,
}

impl Default for PathGenerator {
    fn default() -> Self {
        Self::new(PATH_START_DIRECTION)
    }
}

impl PathGenerator {
    /// A single-waypoint stub at the origin facing `direction` (unit length).
    pub fn new(direction: Vec2) -> Self {
        Self {
            waypoints: vec![Vec2::ZERO],
            end_location: Vec2::ZERO,
            direction,
            step_index: 1,
            bounds: Rect::default(),
        }
    }

    /// Extend the path by one segment.
    ///
    /// Returns the new bounding box when the new waypoint fell outside the
    /// previous one.
    pub fn grow_one_segment(&mut self) -> Option<Rect> {
        self.end_location += self.direction * PATH_SEGMENT_LENGTH;
        self.waypoints.push(self.end_location);

        self.direction = if turns_clockwise(self.step_index) {
            rotate_cw(self.direction)
        } else {
            rotate_ccw(self.direction)
        };
        self.step_index += 1;

        if self.bounds.contains_point(self.end_location) {
            return None;
        }
        self.bounds = self.bounds.union_point(self.end_location);
        Some(self.bounds)
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    // Never empty: the start waypoint is always present.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// First waypoint, where enemies spawn.
    pub fn start(&self) -> Vec2 {
        self.waypoints[0]
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}

/// Timer state for the regrowth phase after each round.
#[derive(Debug, Clone)]
pub struct PathGrowth {
    /// Waypoint count at which growth stops.
    pub target_len: usize,
    /// Seconds between new segments.
    pub interval_secs: f64,
    /// Seconds until the next segment.
    pub timer_secs: f64,
    pub ready: bool,
}

impl PathGrowth {
    /// A finished growth phase at `len` waypoints.
    pub fn ready_at(len: usize) -> Self {
        Self {
            target_len: len,
            interval_secs: 0.0,
            timer_secs: 0.0,
            ready: true,
        }
    }

    /// Begin growing from `current_len` to 1.6x its length over a fixed
    /// two simulated seconds.
    pub fn begin(current_len: usize) -> Self {
        let target_len = (current_len as f64 * PATH_GROWTH_FACTOR) as usize;
        let new_segments = target_len.saturating_sub(current_len).max(1);
        Self {
            target_len,
            interval_secs: PATH_GROWTH_DURATION / new_segments as f64,
            timer_secs: 0.0,
            ready: false,
        }
    }
}
