//! Camera framing around the path bounding box.
//!
//! Drawing is the frontend's job, but the framing factor feeds back into the
//! simulation: once the first wave has started, every reframe scales the
//! tower template by the same factor.

use dragon_core::constants::CAMERA_MARGIN;
use dragon_core::types::{Rect, Vec2};

#[derive(Debug, Clone)]
pub struct Camera {
    /// Visible world region.
    pub view: Rect,
    /// Output size in pixels.
    pub screen_size: Vec2,
}

impl Camera {
    /// Camera showing exactly one screen of world space from the origin.
    pub fn new(screen_size: Vec2) -> Self {
        Self {
            view: Rect::new(screen_size / 2.0, screen_size),
            screen_size,
        }
    }

    /// Re-center on `bounds` and grow or shrink to contain it plus a margin.
    ///
    /// Returns the uniform scale factor applied to the camera size.
    pub fn frame(&mut self, bounds: &Rect) -> f64 {
        assert!(
            self.view.size.x > 0.0 && self.view.size.y > 0.0,
            "camera size degenerated to {}",
            self.view.size
        );
        let min_size = bounds.size + Vec2::splat(CAMERA_MARGIN);
        let factor = (min_size / self.view.size).max_element();

        self.view.position = bounds.position;
        self.view.size *= factor;
        factor
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen * (self.view.size / self.screen_size) + self.view.min_xy()
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.view.min_xy()) * (self.screen_size / self.view.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Vec2 {
        Vec2::new(320.0, 240.0)
    }

    #[test]
    fn test_new_camera_maps_pixels_one_to_one() {
        let camera = Camera::new(screen());
        let p = Vec2::new(37.0, 211.0);
        assert_eq!(camera.screen_to_world(p), p);
        assert_eq!(camera.world_to_screen(p), p);
    }

    #[test]
    fn test_frame_uses_dominant_axis() {
        let mut camera = Camera::new(screen());
        let bounds = Rect::new(Vec2::new(10.0, -5.0), Vec2::new(270.0, 50.0));
        // (270 + 50) / 320 = 1.0, (50 + 50) / 240 < 1.0
        let factor = camera.frame(&bounds);
        assert!((factor - 1.0).abs() < 1e-12);
        assert_eq!(camera.view.position, bounds.position);
        assert!(camera.view.size.x >= bounds.size.x + CAMERA_MARGIN);
        assert!(camera.view.size.y >= bounds.size.y + CAMERA_MARGIN);
    }

    #[test]
    fn test_frame_shrinks_for_small_bounds() {
        let mut camera = Camera::new(screen());
        let bounds = Rect::new(Vec2::new(-12.5, 0.0), Vec2::new(25.0, 0.0));
        let factor = camera.frame(&bounds);
        // max(75 / 320, 50 / 240)
        assert!((factor - 75.0 / 320.0).abs() < 1e-12);
        assert!((camera.view.size.x - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_screen_world_round_trip_after_framing() {
        let mut camera = Camera::new(screen());
        camera.frame(&Rect::new(Vec2::new(12.5, -25.0), Vec2::new(75.0, 50.0)));
        let p = Vec2::new(100.0, 60.0);
        let back = camera.world_to_screen(camera.screen_to_world(p));
        assert!((back - p).length() < 1e-9);
        // Screen center maps onto the framed center.
        let center = camera.screen_to_world(screen() / 2.0);
        assert!((center - Vec2::new(12.5, -25.0)).length() < 1e-9);
    }
}
