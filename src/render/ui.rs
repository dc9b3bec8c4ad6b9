//! Panel and bench rendering

use macroquad::prelude::*;

use crate::game::crafter::SLOT_COUNT;
use crate::game::GameState;
use crate::ui::{UiElementId, UiLayout};

use super::Renderer;

// Shared palette
const PANEL_BG: Color = Color::new(0.071, 0.071, 0.094, 0.961);
const PANEL_FRAME: Color = Color::new(0.557, 0.424, 0.267, 1.0);
const SLOT_BG: Color = Color::new(0.086, 0.086, 0.118, 1.0);
const SLOT_BORDER: Color = Color::new(0.227, 0.212, 0.188, 1.0);
const SLOT_SELECTED_BORDER: Color = Color::new(0.855, 0.737, 0.502, 1.0);
const TEXT_TITLE: Color = Color::new(0.855, 0.737, 0.502, 1.0);
const TEXT_NORMAL: Color = Color::new(0.824, 0.824, 0.855, 1.0);
const TEXT_DIM: Color = Color::new(0.502, 0.502, 0.541, 1.0);

const SLOT_SIZE: f32 = 56.0;
const SLOT_GAP: f32 = 12.0;

impl Renderer {
    pub(super) fn draw_panels(&self, state: &GameState, layout: &mut UiLayout) {
        let panels = state.tutorial.panels();

        if panels.controls {
            self.draw_message_panel(
                "Controls",
                &[
                    "WASD / arrows - move",
                    "Left click - pick up and place items",
                    "Right click - clear a bench slot",
                    "Enter - continue, Backspace - go back",
                ],
            );
        }

        if panels.animation {
            self.draw_message_panel(
                "The Lab",
                &[
                    "Your character putters around the lab on its own.",
                    "Watch the bench bubble while you read.",
                ],
            );
        }

        if panels.notebook {
            self.draw_message_panel(
                "Notebook",
                &[
                    "Every discovery is written down once.",
                    "Check the counter in the corner.",
                ],
            );
        }

        if panels.lab || panels.hud {
            self.draw_bench(state, layout);
            self.draw_shelf(state, layout);
        }

        if panels.hud {
            self.draw_hud(state);
        }
    }

    fn draw_message_panel(&self, title: &str, lines: &[&str]) {
        let width = 520.0;
        let height = 90.0 + lines.len() as f32 * 24.0;
        let x = (screen_width() - width) / 2.0;
        let y = (screen_height() - height) / 2.0;

        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.5));
        draw_rectangle(x, y, width, height, PANEL_BG);
        draw_rectangle_lines(x, y, width, height, 3.0, PANEL_FRAME);

        draw_text(title, x + 20.0, y + 36.0, 28.0, TEXT_TITLE);
        for (i, line) in lines.iter().enumerate() {
            draw_text(line, x + 20.0, y + 70.0 + i as f32 * 24.0, 18.0, TEXT_NORMAL);
        }
        draw_text("[Enter]", x + width - 80.0, y + height - 16.0, 16.0, TEXT_DIM);
    }

    /// Crafting bench: three input slots and the result strip below them
    fn draw_bench(&self, state: &GameState, layout: &mut UiLayout) {
        let width = SLOT_COUNT as f32 * (SLOT_SIZE + SLOT_GAP) + SLOT_GAP;
        let height = 2.0 * SLOT_SIZE + 3.0 * SLOT_GAP + 20.0;
        let x = screen_width() - width - 16.0;
        let y = 16.0;

        draw_rectangle(x, y, width, height, PANEL_BG);
        draw_rectangle_lines(x, y, width, height, 2.0, PANEL_FRAME);
        draw_text("Bench", x + SLOT_GAP, y + 16.0, 16.0, TEXT_TITLE);

        for slot in 1..=SLOT_COUNT {
            let slot_x = x + SLOT_GAP + (slot - 1) as f32 * (SLOT_SIZE + SLOT_GAP);
            let slot_y = y + 20.0 + SLOT_GAP;
            let bounds = Rect::new(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE);
            layout.add(UiElementId::CraftSlot(slot), bounds);

            draw_rectangle(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE, SLOT_BG);
            draw_rectangle_lines(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE, 2.0, SLOT_BORDER);

            if let Some(item_id) = state.crafter.slot(slot) {
                self.draw_item_chip(state, item_id, bounds, 1.0);
            }
        }

        // Results, ghosts drawn faded
        let result_y = y + 20.0 + 2.0 * SLOT_GAP + SLOT_SIZE;
        for (i, result) in state.crafter.results().iter().enumerate() {
            let result_x = x + SLOT_GAP + i as f32 * (SLOT_SIZE + SLOT_GAP);
            let bounds = Rect::new(result_x, result_y, SLOT_SIZE, SLOT_SIZE);

            draw_rectangle(result_x, result_y, SLOT_SIZE, SLOT_SIZE, SLOT_BG);
            draw_rectangle_lines(result_x, result_y, SLOT_SIZE, SLOT_SIZE, 2.0, PANEL_FRAME);
            let alpha = if result.ghost { 0.35 } else { 1.0 };
            self.draw_item_chip(state, &result.item_id, bounds, alpha);
        }
    }

    /// Inventory shelf along the bottom edge
    fn draw_shelf(&self, state: &GameState, layout: &mut UiLayout) {
        let items = state.inventory.items();
        if items.is_empty() {
            return;
        }

        let width = items.len() as f32 * (SLOT_SIZE + SLOT_GAP) + SLOT_GAP;
        let height = SLOT_SIZE + 2.0 * SLOT_GAP;
        let x = (screen_width() - width) / 2.0;
        let y = screen_height() - height - 12.0;

        draw_rectangle(x, y, width, height, PANEL_BG);
        draw_rectangle_lines(x, y, width, height, 2.0, PANEL_FRAME);

        for (i, item_id) in items.iter().enumerate() {
            let slot_x = x + SLOT_GAP + i as f32 * (SLOT_SIZE + SLOT_GAP);
            let slot_y = y + SLOT_GAP;
            let bounds = Rect::new(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE);
            layout.add(UiElementId::InventoryEntry(i), bounds);

            let border = if state.selected_item == Some(i) {
                SLOT_SELECTED_BORDER
            } else {
                SLOT_BORDER
            };
            draw_rectangle(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE, SLOT_BG);
            draw_rectangle_lines(slot_x, slot_y, SLOT_SIZE, SLOT_SIZE, 2.0, border);
            self.draw_item_chip(state, item_id, bounds, 1.0);
        }
    }

    fn draw_hud(&self, state: &GameState) {
        draw_text(
            &format!("Discoveries: {}", state.discoveries.len()),
            12.0,
            24.0,
            20.0,
            TEXT_TITLE,
        );
    }

    /// An item as a tinted chip with its name underneath. Sprite art comes
    /// later; the fallback tint keeps items tell-apart-able until then.
    fn draw_item_chip(&self, state: &GameState, item_id: &str, bounds: Rect, alpha: f32) {
        let mut color = state
            .items
            .get(item_id)
            .map(|def| def.fallback_color())
            .unwrap_or(GRAY);
        color.a = alpha;

        draw_rectangle(
            bounds.x + 6.0,
            bounds.y + 6.0,
            bounds.w - 12.0,
            bounds.h - 12.0,
            color,
        );

        let name = state.items.display_name(item_id);
        let mut text_color = TEXT_NORMAL;
        text_color.a = alpha;
        draw_text(
            name,
            bounds.x + 2.0,
            bounds.y + bounds.h + 12.0,
            14.0,
            text_color,
        );
    }
}
