//! The controllable character the camera follows

use macroquad::prelude::*;

pub struct Player {
    pub position: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            speed: 12.0,
        }
    }

    /// Move along the (already normalized) input direction
    pub fn update(&mut self, dir: Vec2, dt: f32) {
        self.position += dir * self.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_along_input() {
        let mut player = Player::new(Vec2::ZERO);
        player.update(Vec2::new(1.0, 0.0), 0.5);
        assert_eq!(player.position, Vec2::new(6.0, 0.0));

        player.update(Vec2::ZERO, 0.5);
        assert_eq!(player.position, Vec2::new(6.0, 0.0));
    }
}
