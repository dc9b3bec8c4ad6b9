//! Input polling
//!
//! Polled once per tick; everything the rest of the game sees is either a
//! discrete command message or the current movement direction. No other
//! module touches the keyboard or mouse directly.

use macroquad::prelude::*;

use crate::ui::{UiElementId, UiLayout};

/// Discrete commands produced from raw input
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    TutorialAdvance,
    TutorialBack,
    SelectItem { index: usize },
    PlaceItem { slot: usize },
    ClearSlot { slot: usize },
    MasterVolumeDown,
    MasterVolumeUp,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Collect this tick's commands, resolving clicks against the UI layout
    /// the renderer produced last frame.
    pub fn process(&mut self, layout: &UiLayout) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        // Tutorial input is edge-triggered on key release
        if is_key_released(KeyCode::Enter) {
            commands.push(InputCommand::TutorialAdvance);
        }
        if is_key_released(KeyCode::Backspace) {
            commands.push(InputCommand::TutorialBack);
        }

        if is_key_pressed(KeyCode::Minus) {
            commands.push(InputCommand::MasterVolumeDown);
        }
        if is_key_pressed(KeyCode::Equal) {
            commands.push(InputCommand::MasterVolumeUp);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            match layout.hit_test(x, y) {
                Some(UiElementId::InventoryEntry(index)) => {
                    commands.push(InputCommand::SelectItem { index });
                }
                Some(UiElementId::CraftSlot(slot)) => {
                    commands.push(InputCommand::PlaceItem { slot });
                }
                None => {}
            }
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            let (x, y) = mouse_position();
            if let Some(UiElementId::CraftSlot(slot)) = layout.hit_test(x, y) {
                commands.push(InputCommand::ClearSlot { slot });
            }
        }

        commands
    }

    /// Current movement direction from held keys, normalized
    pub fn movement(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) {
            dir.y -= 1.0;
        }
        if is_key_down(KeyCode::S) || is_key_down(KeyCode::Down) {
            dir.y += 1.0;
        }
        if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
            dir.x -= 1.0;
        }
        if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
