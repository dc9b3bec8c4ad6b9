//! Playback seam between the audio manager and the engine mixer

use macroquad::audio::{play_sound, set_sound_volume, PlaySoundParams, Sound};

/// One dedicated output channel per registered clip. The manager computes
/// effective volume/pitch; the sink owns the engine side.
pub trait AudioSink {
    fn play(&mut self, channel: usize, volume: f32, pitch: f32, looped: bool);
    fn set_volume(&mut self, channel: usize, volume: f32);
}

/// Sink backed by the macroquad mixer. Channels map to preloaded clips in
/// bank order; a clip that failed to load leaves a hole play requests skip.
pub struct QuadSink {
    channels: Vec<Option<Sound>>,
}

impl QuadSink {
    pub fn new(channels: Vec<Option<Sound>>) -> Self {
        Self { channels }
    }
}

impl AudioSink for QuadSink {
    fn play(&mut self, channel: usize, volume: f32, pitch: f32, looped: bool) {
        // miniquad's mixer has no pitch control, so the computed pitch stops here
        let _ = pitch;
        match self.channels.get(channel) {
            Some(Some(sound)) => play_sound(sound, PlaySoundParams { looped, volume }),
            _ => log::warn!("Audio: channel {} has no loaded clip", channel),
        }
    }

    fn set_volume(&mut self, channel: usize, volume: f32) {
        if let Some(Some(sound)) = self.channels.get(channel) {
            set_sound_volume(sound, volume);
        }
    }
}
