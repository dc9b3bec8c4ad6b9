use std::path::Path;

use macroquad::audio::load_sound;
use macroquad::prelude::*;

mod audio;
mod game;
mod input;
mod render;
mod ui;

use audio::{AudioBank, AudioManager, QuadSink};
use game::item::ItemRegistry;
use game::recipes::RecipeBook;
use game::GameState;
use input::{InputCommand, InputHandler};
use render::Renderer;
use ui::UiLayout;

const ITEMS_PATH: &str = "assets/data/items.toml";
const RECIPES_PATH: &str = "assets/data/recipes.toml";
const AUDIO_PATH: &str = "assets/data/audio.toml";

const VOLUME_STEP: f32 = 0.1;

fn window_conf() -> Conf {
    Conf {
        window_title: "Lab Prototype".to_string(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut state = match load_game_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            return;
        }
    };

    let bank = match AudioBank::load_from_file(Path::new(AUDIO_PATH)) {
        Ok(bank) => bank,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            return;
        }
    };

    // Preload every clip; a channel keeps its place even when the clip is
    // missing so name -> channel bindings stay stable
    let mut channels = Vec::new();
    for path in bank.clip_paths() {
        match load_sound(path).await {
            Ok(sound) => channels.push(Some(sound)),
            Err(e) => {
                log::warn!("Failed to load clip '{}': {:?}", path, e);
                channels.push(None);
            }
        }
    }

    let mut audio = AudioManager::new(
        bank,
        audio::load_settings(),
        Box::new(QuadSink::new(channels)),
    );
    audio.set_scene("lab");
    audio.play_music("lab_theme");

    let renderer = Renderer::new();
    let mut input_handler = InputHandler::new();

    // Clicks resolve against the layout the renderer produced last frame
    let mut layout = UiLayout::new();

    loop {
        let delta = get_frame_time();

        if is_key_pressed(KeyCode::F3) {
            state.debug_mode = !state.debug_mode;
        }

        let commands = input_handler.process(&layout);
        for command in &commands {
            match command {
                InputCommand::MasterVolumeDown => adjust_master_volume(&mut audio, -VOLUME_STEP),
                InputCommand::MasterVolumeUp => adjust_master_volume(&mut audio, VOLUME_STEP),
                _ => state.apply(command, &mut audio),
            }
        }

        state.update(input_handler.movement(), delta);

        layout = renderer.render(&state);

        next_frame().await
    }
}

fn load_game_state() -> Result<GameState, String> {
    let mut items = ItemRegistry::new();
    items.load_from_file(Path::new(ITEMS_PATH))?;

    let mut recipes = RecipeBook::new();
    recipes.load_from_file(Path::new(RECIPES_PATH))?;

    Ok(GameState::new(items, recipes))
}

fn adjust_master_volume(audio: &mut AudioManager, delta: f32) {
    let volume = audio.settings().master_volume + delta;
    audio.set_master_volume(volume);
    audio::save_settings(&audio.settings());
    log::info!("Master volume: {:.1}", audio.settings().master_volume);
}
