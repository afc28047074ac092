use super::patch::Patch;
use super::sample_buffer::SampleBuffer;
use super::voice::PatchVoice;

// Where voices get scheduled. Drum voices are written once against this and
// never care whether they end up in a speaker or in a buffer.
pub trait SoundSink {
    fn sample_rate(&self) -> u32;

    // seconds on this sink's timeline
    fn current_time(&self) -> f64;

    // every noise patch asks for its own seed
    fn next_noise_seed(&mut self) -> u64;

    fn play(&mut self, patch: Patch);
}

// Seeds are a plain counter off a base seed, so a render is reproducible
// as long as the scheduling order is.
#[derive(Clone, Copy, Debug)]
pub struct SeedSequence {
    base: u64,
    count: u64,
}

impl SeedSequence {
    pub fn new(base: u64) -> Self {
        Self { base, count: 0 }
    }

    pub fn next(&mut self) -> u64 {
        let seed = self.base.wrapping_add(self.count.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.count += 1;
        seed
    }
}

// Render-ahead destination with a fixed length.
pub struct OfflineSink {
    buffer: SampleBuffer,
    seeds: SeedSequence,
    scheduled: usize,
}

impl OfflineSink {
    pub fn new(channels: usize, length: usize, sample_rate: u32, seed: u64) -> Self {
        Self {
            buffer: SampleBuffer::silent(channels, length, sample_rate),
            seeds: SeedSequence::new(seed),
            scheduled: 0,
        }
    }

    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    pub fn finish(self) -> SampleBuffer {
        self.buffer
    }
}

impl SoundSink for OfflineSink {
    fn sample_rate(&self) -> u32 {
        self.buffer.sample_rate
    }

    fn current_time(&self) -> f64 {
        0.0 // nothing plays until the whole thing is rendered
    }

    fn next_noise_seed(&mut self) -> u64 {
        self.seeds.next()
    }

    fn play(&mut self, patch: Patch) {
        let mut voice = PatchVoice::new(patch, self.buffer.sample_rate);
        voice.render_into(&mut self.buffer.channels, 0);
        self.scheduled += 1;
    }
}

// Keeps every patch instead of sounding it; used to print schedules and to
// compare what the two playback modes asked for.
#[derive(Clone, Debug)]
pub struct RecordingSink {
    pub sample_rate: u32,
    pub now: f64,
    pub patches: Vec<Patch>,
    seeds: SeedSequence,
}

impl RecordingSink {
    pub fn new(sample_rate: u32, seed: u64) -> Self {
        Self {
            sample_rate,
            now: 0.0,
            patches: Vec::new(),
            seeds: SeedSequence::new(seed),
        }
    }
}

impl SoundSink for RecordingSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn current_time(&self) -> f64 {
        self.now
    }

    fn next_noise_seed(&mut self) -> u64 {
        self.seeds.next()
    }

    fn play(&mut self, patch: Patch) {
        self.patches.push(patch);
    }
}
