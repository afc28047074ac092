use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::audio_api::AudioCommand;
use crate::error::{Error, Result};

mod automation;
pub mod drums;
mod engine;
mod notes;
mod patch;
mod sample_buffer;
mod sink;
mod voice;

pub use automation::{Automation, AutomationEvent, Ramp};
pub use notes::{NoteTable, FALLBACK_FREQUENCY};
pub use patch::{FilterKind, FilterSpec, Patch, PatchBuilder, Source, Waveform};
pub use sample_buffer::{concatenate, SampleBuffer};
pub use sink::{OfflineSink, RecordingSink, SeedSequence, SoundSink};
pub use voice::PatchVoice;

use engine::Engine;

// Keeps the output stream alive. Dropping it closes the device.
pub struct AudioHandle {
    tx: Sender<AudioCommand>,
    _output_stream: cpal::Stream,
}

impl AudioHandle {
    pub fn send(&self, cmd: AudioCommand) {
        let _ = self.tx.try_send(cmd);
    }
}

impl Drop for AudioHandle {
    fn drop(&mut self) {
        self.send(AudioCommand::Silence);
    }
}

// The scheduling end of a live stream. Cheap to move onto a ticker thread.
pub struct LiveSink {
    tx: Sender<AudioCommand>,
    position: Arc<AtomicU64>,
    sample_rate: u32,
    seeds: SeedSequence,
}

impl SoundSink for LiveSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn current_time(&self) -> f64 {
        self.position.load(Ordering::Acquire) as f64 / self.sample_rate as f64
    }

    fn next_noise_seed(&mut self) -> u64 {
        self.seeds.next()
    }

    fn play(&mut self, patch: Patch) {
        if self.tx.try_send(AudioCommand::Play(patch)).is_err() {
            log::warn!("audio command queue full, dropping a hit");
        }
    }
}

// Open the default output device and start rendering silence until patches arrive.
pub fn start_audio(seed: u64) -> Result<(AudioHandle, LiveSink)> {
    let (tx, rx) = crossbeam_channel::bounded::<AudioCommand>(1024);

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| Error::Device("no default output device".into()))?;
    let config = device
        .default_output_config()
        .map_err(|e| Error::Device(format!("no default output config: {e}")))?;

    let sample_rate: u32 = config.sample_rate();
    let channels = config.channels() as usize;
    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(Error::Device(format!(
            "unsupported sample format {:?} (only f32 supported for now)",
            config.sample_format()
        )));
    }

    let position = Arc::new(AtomicU64::new(0));
    let mut engine = Engine::new(sample_rate, position.clone());
    let err_fn = |err| log::error!("audio output stream error: {err}");

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                while let Ok(cmd) = rx.try_recv() {
                    engine.handle_cmd(cmd);
                }
                engine.render_block(data, channels);
            },
            err_fn,
            None,
        )
        .map_err(|e| Error::Device(format!("failed to build output stream: {e}")))?;
    stream
        .play()
        .map_err(|e| Error::Device(format!("failed to play output stream: {e}")))?;

    log::info!("audio output open: {sample_rate} Hz, {channels} channels");

    let sink = LiveSink {
        tx: tx.clone(),
        position,
        sample_rate,
        seeds: SeedSequence::new(seed),
    };
    Ok((AudioHandle { tx, _output_stream: stream }, sink))
}
