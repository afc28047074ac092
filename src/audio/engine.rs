use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::audio_api::AudioCommand;
use super::voice::PatchVoice;

const MAX_VOICES: usize = 64; // hard cap so we don't grow the pool in the audio callback

pub struct Engine {
    sample_rate: u32,
    voices: Vec<PatchVoice>,
    frame: u64,              // frames rendered since the stream opened
    position: Arc<AtomicU64>, // published copy of `frame` for the scheduling thread
}

impl Engine {
    pub fn new(sample_rate: u32, position: Arc<AtomicU64>) -> Self {
        Self {
            sample_rate,
            voices: Vec::with_capacity(MAX_VOICES),
            frame: 0,
            position,
        }
    }

    pub fn handle_cmd(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::Play(patch) => {
                if self.voices.len() == MAX_VOICES {
                    self.voices.remove(0); // steal the oldest
                }
                self.voices.push(PatchVoice::new(patch, self.sample_rate));
            }
            AudioCommand::Silence => self.voices.clear(),
        }
    }

    // Fill an interleaved output block. Every voice is mono and lands on all channels.
    pub fn render_block(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        for (i, frame) in data.chunks_mut(channels).enumerate() {
            let now = self.frame + i as u64;
            let mut mix = 0.0f32;
            for v in self.voices.iter_mut() {
                if now >= v.start_frame && !v.is_finished() {
                    mix += v.render_frame();
                }
            }
            frame.fill(mix);
        }
        self.frame += (data.len() / channels) as u64;
        self.voices.retain(|v| !v.is_finished());
        self.position.store(self.frame, Ordering::Release);
    }

    #[cfg(test)]
    fn active_voices(&self) -> usize {
        self.voices.len()
    }
}
