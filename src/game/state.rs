//! Game state wiring
//!
//! Owns every simulation-side object and routes the discrete input commands
//! between them. Nothing here is global; collaborators are passed down by
//! explicit borrow.

use macroquad::prelude::*;

use crate::audio::AudioManager;
use crate::input::InputCommand;

use super::camera::CameraController;
use super::crafter::{CraftEvent, Crafter};
use super::inventory::{Discoveries, Inventory};
use super::item::ItemRegistry;
use super::player::Player;
use super::recipes::RecipeBook;
use super::tutorial::TutorialManager;

pub struct GameState {
    pub items: ItemRegistry,
    pub recipes: RecipeBook,
    pub inventory: Inventory,
    pub discoveries: Discoveries,
    pub crafter: Crafter,
    pub tutorial: TutorialManager,
    pub camera: CameraController,
    pub player: Player,

    /// Index into `inventory.items()` of the shelf entry picked up last
    pub selected_item: Option<usize>,
    pub debug_mode: bool,
}

impl GameState {
    pub fn new(items: ItemRegistry, recipes: RecipeBook) -> Self {
        let mut inventory = Inventory::new();
        for id in items.starting_ids() {
            inventory.add_item(id);
        }

        let player = Player::new(Vec2::ZERO);
        let camera = CameraController::new(player.position);

        Self {
            items,
            recipes,
            inventory,
            discoveries: Discoveries::new(),
            crafter: Crafter::new(),
            tutorial: TutorialManager::new(),
            camera,
            player,
            selected_item: None,
            debug_mode: false,
        }
    }

    /// Route one input command through the simulation
    pub fn apply(&mut self, command: &InputCommand, audio: &mut AudioManager) {
        match command {
            InputCommand::TutorialAdvance => {
                if let Some(change) = self.tutorial.advance() {
                    self.camera.set_zooming(change.camera_zoom);
                    audio.play_sound("page_turn");
                }
            }

            InputCommand::TutorialBack => {
                if let Some(change) = self.tutorial.back() {
                    self.camera.set_zooming(change.camera_zoom);
                    audio.play_sound("page_turn");
                }
            }

            InputCommand::SelectItem { index } => {
                if *index < self.inventory.items().len() {
                    self.selected_item = Some(*index);
                    audio.play_sound("item_grab");
                }
            }

            InputCommand::PlaceItem { slot } => {
                let Some(item_id) = self
                    .selected_item
                    .and_then(|index| self.inventory.items().get(index))
                    .cloned()
                else {
                    return;
                };

                let before = self.discoveries.len();
                let events = self.crafter.add_item(
                    &item_id,
                    *slot,
                    &self.recipes,
                    &mut self.inventory,
                    &mut self.discoveries,
                );
                audio.play_sound("item_put");
                if self.discoveries.len() > before {
                    audio.play_sound("discovery");
                }
                self.handle_craft_events(&events);
            }

            InputCommand::ClearSlot { slot } => {
                if self.crafter.slot(*slot).is_none() {
                    return;
                }

                let before = self.discoveries.len();
                let events = self.crafter.remove_item(
                    *slot,
                    &self.recipes,
                    &mut self.inventory,
                    &mut self.discoveries,
                );
                audio.play_sound("item_grab");
                if self.discoveries.len() > before {
                    audio.play_sound("discovery");
                }
                self.handle_craft_events(&events);
            }

            // Volume commands are applied by the shell loop, which also
            // persists the settings
            InputCommand::MasterVolumeDown | InputCommand::MasterVolumeUp => {}
        }
    }

    fn handle_craft_events(&mut self, events: &[CraftEvent]) {
        for event in events {
            match event.name.as_str() {
                "advance_tutorial" => {
                    if let Some(change) = self.tutorial.advance() {
                        self.camera.set_zooming(change.camera_zoom);
                    }
                }
                other => {
                    log::warn!("Unknown craft event '{}' from recipe result '{}'", other, event.result);
                }
            }
        }
    }

    /// Advance the simulation one tick
    pub fn update(&mut self, move_dir: Vec2, dt: f32) {
        self.player.update(move_dir, dt);
        self.camera.update(self.player.position, dt);
    }
}
