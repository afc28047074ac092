use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::audio::{NoteTable, OfflineSink, SampleBuffer, SoundSink};
use crate::error::{Error, Result};
use crate::pipeline::{BeatPattern, Catalog, PartType, RenderedTrack, MAX_DATA_LEN};
use crate::shared::{DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, STEPS_PER_BAR};

use super::{schedule_step, Mix, StepContext, Timing};

#[derive(Clone, Debug, PartialEq)]
pub struct BackingTrackRequest {
    pub genre: String,
    pub part: PartType,
    pub bpm: f64,
    pub bars: u32,
}

impl BackingTrackRequest {
    pub fn new(genre: impl Into<String>, part: PartType, bpm: f64, bars: u32) -> Self {
        Self { genre: genre.into(), part, bpm, bars }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub sample_rate: u32,
    pub channels: usize,
    pub seed: u64, // noise seed; same seed, same samples
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
            seed: 0,
        }
    }
}

// Everything resolved up front, so rendering needs no catalog and can move
// to another thread.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    genre: String,
    part: PartType,
    pattern: BeatPattern,
    timing: Timing,
    bars: u32,
    frames: usize,
    settings: RenderSettings,
    mix: Mix,
    notes: NoteTable,
}

impl RenderPlan {
    pub fn resolve(catalog: &Catalog, request: &BackingTrackRequest, settings: RenderSettings) -> Result<Self> {
        if !(request.bpm.is_finite() && request.bpm > 0.0) {
            return Err(Error::Tempo(request.bpm));
        }
        if settings.sample_rate == 0 || settings.channels == 0 {
            return Err(Error::Device(format!(
                "cannot render {} channels at {} Hz",
                settings.channels, settings.sample_rate
            )));
        }
        let config = catalog.genre(&request.genre);
        let timing = Timing::new(request.bpm, config.swing);
        let frames = frame_count(request.bars, timing, settings)?;
        Ok(Self {
            genre: config.key.clone(),
            part: request.part,
            pattern: config.pattern(request.part).clone(),
            timing,
            bars: request.bars,
            frames,
            settings,
            mix: Mix::default(),
            notes: NoteTable::new(),
        })
    }

    // resolved genre key, after fallback
    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    // Every hit of every bar at its absolute time. Returns the hit count.
    pub fn schedule(&self, sink: &mut dyn SoundSink) -> usize {
        let ctx = StepContext {
            pattern: &self.pattern,
            timing: self.timing,
            mix: self.mix,
            notes: &self.notes,
        };
        let mut hits = 0;
        for bar in 0..self.bars {
            for step in 0..STEPS_PER_BAR as u8 {
                hits += schedule_step(&ctx, step, self.timing.step_time(bar, step), sink);
            }
        }
        hits
    }

    pub fn render(&self) -> SampleBuffer {
        let s = self.settings;
        let mut sink = OfflineSink::new(s.channels, self.frames, s.sample_rate, s.seed);
        let hits = self.schedule(&mut sink);
        log::info!(
            "rendered {} {} at {} bpm: {} bars, {} hits, {} patches, {} frames",
            self.genre,
            self.part,
            self.timing.bpm,
            self.bars,
            hits,
            sink.scheduled(),
            self.frames
        );
        sink.finish()
    }

    // Render on a worker thread. Dropping the handle just throws the result away.
    pub fn submit(self) -> Result<PendingRender> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let worker = thread::Builder::new()
            .name("offline-render".into())
            .spawn(move || {
                let _ = tx.send(self.render());
            })?;
        Ok(PendingRender { rx, worker })
    }
}

// Length in frames, worked out in f64 so absurd tempos or bar counts come
// back as an error instead of a saturated usize.
fn frame_count(bars: u32, timing: Timing, settings: RenderSettings) -> Result<usize> {
    let seconds = bars as f64 * timing.bar_duration();
    let frames = (seconds * settings.sample_rate as f64).round();
    let bytes = frames * settings.channels as f64 * 2.0;
    if !frames.is_finite() || bytes > MAX_DATA_LEN as f64 {
        return Err(Error::TooLong { seconds, sample_rate: settings.sample_rate });
    }
    Ok(frames as usize)
}

pub struct PendingRender {
    rx: Receiver<SampleBuffer>,
    worker: JoinHandle<()>,
}

impl PendingRender {
    pub fn wait(self) -> Result<SampleBuffer> {
        let result = self.rx.recv();
        if self.worker.join().is_err() {
            return Err(Error::Device("render worker panicked".into()));
        }
        result.map_err(|_| Error::Device("render worker stopped without a result".into()))
    }
}

// Render one part of one genre and encode it.
pub fn generate_backing_track(
    catalog: &Catalog,
    request: &BackingTrackRequest,
    settings: RenderSettings,
) -> Result<RenderedTrack> {
    let buffer = RenderPlan::resolve(catalog, request, settings)?.render();
    RenderedTrack::new(buffer)
}
