//! Follow camera
//!
//! Critically damped spring toward the target plus a horizontal look-ahead
//! that snaps in the direction of travel and decays back to zero when the
//! target settles. The tutorial drives `zooming`; each tick the view size
//! tightens toward `min_size` while zooming and relaxes toward `max_size`
//! otherwise, always clamped to the configured range.

use macroquad::prelude::*;

const ZOOM_STEP: f32 = 0.1;

pub struct CameraController {
    pub damping: f32,
    pub look_ahead_factor: f32,
    pub look_ahead_return_speed: f32,
    pub look_ahead_move_threshold: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub zooming: bool,

    position: Vec2,
    size: f32,
    last_target: Vec2,
    velocity: Vec2,
    look_ahead: Vec2,
}

impl CameraController {
    pub fn new(target: Vec2) -> Self {
        Self {
            damping: 1.0,
            look_ahead_factor: 3.0,
            look_ahead_return_speed: 0.5,
            look_ahead_move_threshold: 0.1,
            min_size: 10.0,
            max_size: 25.0,
            zooming: false,
            position: target,
            size: 25.0,
            last_target: target,
            velocity: Vec2::ZERO,
            look_ahead: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current orthographic half-height
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current look-ahead offset, for the debug overlay
    pub fn look_ahead(&self) -> Vec2 {
        self.look_ahead
    }

    pub fn set_zooming(&mut self, zooming: bool) {
        self.zooming = zooming;
    }

    /// Advance one tick toward `target`
    pub fn update(&mut self, target: Vec2, dt: f32) {
        // Look-ahead reacts only to horizontal movement since last tick
        let x_delta = target.x - self.last_target.x;
        if x_delta.abs() > self.look_ahead_move_threshold {
            self.look_ahead = Vec2::new(self.look_ahead_factor * x_delta.signum(), 0.0);
        } else {
            self.look_ahead = move_towards(
                self.look_ahead,
                Vec2::ZERO,
                self.look_ahead_return_speed * dt,
            );
        }

        let ahead_target = target + self.look_ahead;
        self.position = smooth_damp(
            self.position,
            ahead_target,
            &mut self.velocity,
            self.damping,
            dt,
        );
        self.last_target = target;

        let step = if self.zooming { -ZOOM_STEP } else { ZOOM_STEP };
        self.change_size(step);
    }

    pub fn change_size(&mut self, difference: f32) {
        self.size = (self.size + difference).clamp(self.min_size, self.max_size);
    }
}

/// Move `current` toward `target` by at most `max_delta`, without overshoot
fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();
    if dist <= max_delta || dist < f32::EPSILON {
        target
    } else {
        current + to_target / dist * max_delta
    }
}

/// Critically damped spring, `smooth_time` is the rough time to reach the
/// target. Velocity persists across calls.
fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;

    target + (change + temp) * exp
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_follows_target() {
        let mut camera = CameraController::new(Vec2::ZERO);
        let target = Vec2::new(0.0, 8.0);

        let start_dist = (camera.position() - target).length();
        for _ in 0..180 {
            camera.update(target, DT);
        }
        let end_dist = (camera.position() - target).length();

        assert!(end_dist < start_dist);
        assert!(end_dist < 0.5, "camera should settle near target, was {}", end_dist);
    }

    #[test]
    fn test_look_ahead_snaps_in_movement_direction() {
        let mut camera = CameraController::new(Vec2::ZERO);

        // Move the target right faster than the threshold per tick
        let mut target = Vec2::ZERO;
        for _ in 0..10 {
            target.x += 0.2;
            camera.update(target, DT);
        }
        assert_eq!(camera.look_ahead(), Vec2::new(camera.look_ahead_factor, 0.0));

        // Reverse direction, the offset flips
        for _ in 0..10 {
            target.x -= 0.2;
            camera.update(target, DT);
        }
        assert_eq!(camera.look_ahead(), Vec2::new(-camera.look_ahead_factor, 0.0));
    }

    #[test]
    fn test_look_ahead_decays_when_target_stops() {
        let mut camera = CameraController::new(Vec2::ZERO);

        let mut target = Vec2::ZERO;
        for _ in 0..60 {
            target.x += 0.2;
            camera.update(target, DT);
        }
        assert!(camera.look_ahead().length() > 0.0);

        for _ in 0..600 {
            camera.update(target, DT);
        }

        assert_eq!(camera.look_ahead(), Vec2::ZERO);
        let dist = (camera.position() - target).length();
        assert!(dist < 0.1, "camera should re-center once movement stops, was {}", dist);
    }

    #[test]
    fn test_sub_threshold_movement_does_not_snap() {
        let mut camera = CameraController::new(Vec2::ZERO);

        let mut target = Vec2::ZERO;
        for _ in 0..600 {
            target.x += 0.01; // below look_ahead_move_threshold
            camera.update(target, DT);
        }

        assert_eq!(camera.look_ahead(), Vec2::ZERO);
    }

    #[test]
    fn test_zooming_tightens_toward_min_size() {
        let mut camera = CameraController::new(Vec2::ZERO);
        camera.set_zooming(true);

        for _ in 0..1000 {
            camera.update(Vec2::ZERO, DT);
        }
        assert_eq!(camera.size(), camera.min_size);

        camera.set_zooming(false);
        for _ in 0..1000 {
            camera.update(Vec2::ZERO, DT);
        }
        assert_eq!(camera.size(), camera.max_size);
    }

    #[test]
    fn test_change_size_clamps() {
        let mut camera = CameraController::new(Vec2::ZERO);
        camera.change_size(1000.0);
        assert_eq!(camera.size(), camera.max_size);
        camera.change_size(-1000.0);
        assert_eq!(camera.size(), camera.min_size);
    }
}
