//! Fundamental geometric and simulation types.
//!
//! World space is screen-like: x grows to the right, y grows downward.
//! "Clockwise" and "counter-clockwise" below are as seen on screen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D vector in world units.
pub type Vec2 = DVec2;

/// Quarter turn clockwise (on screen, +y down).
#[inline]
pub fn rotate_cw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Quarter turn counter-clockwise (on screen, +y down).
#[inline]
pub fn rotate_ccw(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Unit vector pointing from `from` to `to`.
///
/// Panics when the two points coincide. Every caller walks between distinct
/// points, so a zero offset here means the simulation state is corrupt.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let offset = to - from;
    let len = offset.length();
    assert!(len > 0.0, "direction_to called with coincident points {from}");
    offset / len
}

/// Axis-aligned rectangle stored as center + size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center of the rectangle.
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Build from min/max corners.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            position: (min + max) / 2.0,
            size: max - min,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.position.x - self.size.x / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.position.x + self.size.x / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.position.y - self.size.y / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.position.y + self.size.y / 2.0
    }

    pub fn min_xy(&self) -> Vec2 {
        Vec2::new(self.min_x(), self.min_y())
    }

    pub fn max_xy(&self) -> Vec2 {
        Vec2::new(self.max_x(), self.max_y())
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// True when `other` lies entirely inside (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.max_x() >= other.max_x()
            && self.min_y() <= other.min_y()
            && self.max_y() >= other.max_y()
    }

    /// Smallest rectangle covering both `self` and `p`.
    pub fn union_point(&self, p: Vec2) -> Rect {
        Rect::from_min_max(self.min_xy().min(p), self.max_xy().max(p))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
