//! Scene rendering
//!
//! Draws the lab floor and the player through the follow camera, then hands
//! off to the UI pass. Returns the frame's hit-test layout for the input
//! handler.

use macroquad::prelude::*;

use crate::game::GameState;
use crate::ui::UiLayout;

const FLOOR_TILE: f32 = 4.0;
const FLOOR_EXTENT: i32 = 16;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, state: &GameState) -> UiLayout {
        let mut layout = UiLayout::new();

        self.draw_world(state);
        self.draw_panels(state, &mut layout);
        if state.debug_mode {
            self.draw_debug(state);
        }

        layout
    }

    /// Screen pixels per world unit at the camera's current size
    fn world_scale(&self, state: &GameState) -> f32 {
        screen_height() / (2.0 * state.camera.size())
    }

    fn world_to_screen(&self, state: &GameState, point: Vec2) -> Vec2 {
        let center = Vec2::new(screen_width() / 2.0, screen_height() / 2.0);
        (point - state.camera.position()) * self.world_scale(state) + center
    }

    fn draw_world(&self, state: &GameState) {
        clear_background(Color::from_rgba(24, 26, 34, 255));

        let scale = self.world_scale(state);
        let grid = Color::from_rgba(40, 44, 58, 255);

        for i in -FLOOR_EXTENT..=FLOOR_EXTENT {
            let offset = i as f32 * FLOOR_TILE;
            let extent = FLOOR_EXTENT as f32 * FLOOR_TILE;

            let a = self.world_to_screen(state, Vec2::new(offset, -extent));
            let b = self.world_to_screen(state, Vec2::new(offset, extent));
            draw_line(a.x, a.y, b.x, b.y, 1.0, grid);

            let a = self.world_to_screen(state, Vec2::new(-extent, offset));
            let b = self.world_to_screen(state, Vec2::new(extent, offset));
            draw_line(a.x, a.y, b.x, b.y, 1.0, grid);
        }

        let player = self.world_to_screen(state, state.player.position);
        draw_circle(player.x, player.y, 0.8 * scale, Color::from_rgba(218, 188, 128, 255));
        draw_circle_lines(player.x, player.y, 0.8 * scale, 2.0, Color::from_rgba(82, 62, 42, 255));
    }

    fn draw_debug(&self, state: &GameState) {
        let color = Color::from_rgba(100, 255, 150, 255);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 20.0, 16.0, color);
        draw_text(
            &format!(
                "pos: ({:.1}, {:.1})  cam size: {:.1}  lead: {:.1}",
                state.player.position.x,
                state.player.position.y,
                state.camera.size(),
                state.camera.look_ahead().x,
            ),
            10.0,
            40.0,
            16.0,
            color,
        );
        draw_text(
            &format!("tutorial: {:?}", state.tutorial.state()),
            10.0,
            60.0,
            16.0,
            color,
        );
    }
}
