//! Sprite frame cycling, independent of movement.

use dragon_core::components::Animation;

/// Advance a looping animation of `frames` frames spread over `cycle_secs`.
pub fn step(animation: &mut Animation, dt: f64, frames: u32, cycle_secs: f64) {
    animation.frame_remaining_secs -= dt;
    if animation.frame_remaining_secs < 0.0 {
        animation.frame_remaining_secs += cycle_secs / frames as f64;
        animation.frame = (animation.frame + 1) % frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_wrap() {
        let mut anim = Animation::default();
        // First step flips immediately, then once every 0.1 s.
        let mut seen = Vec::new();
        for _ in 0..40 {
            step(&mut anim, 0.025, 3, 0.3);
            seen.push(anim.frame);
        }
        assert_eq!(seen[0], 1);
        assert!(seen.iter().all(|&f| f < 3));
        assert!(seen.contains(&0) && seen.contains(&2));
    }
}
