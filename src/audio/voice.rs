use biquad::{Biquad, Coefficients, DirectForm1, ToHertz, Type};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::patch::{FilterKind, FilterSpec, Patch, Source, Waveform};

// keep filter corners strictly under nyquist so coefficient setup can't fail
const MAX_CUTOFF_RATIO: f32 = 0.49;

enum Generator {
    Oscillator { waveform: Waveform, phase: f64 },
    Noise(Pcg32),
}

// A patch turned into a running voice. The offline sink and the live engine
// both pull frames from here, which is what keeps the two modes identical.
pub struct PatchVoice {
    patch: Patch,
    generator: Generator,
    filter: Option<DirectForm1<f32>>,
    sample_rate: f64,
    pub start_frame: u64,
    pub stop_frame: u64, // exclusive
    next_frame: u64,
}

impl PatchVoice {
    pub fn new(patch: Patch, sample_rate: u32) -> Self {
        let rate = sample_rate as f64;
        let generator = match &patch.source {
            Source::Oscillator { waveform, .. } => Generator::Oscillator { waveform: *waveform, phase: 0.0 },
            Source::Noise { seed } => Generator::Noise(Pcg32::seed_from_u64(*seed)),
        };
        let filter = patch.filter.and_then(|spec| build_filter(spec, sample_rate));
        let start_frame = (patch.start.max(0.0) * rate).ceil() as u64;
        let stop_frame = (patch.stop.max(0.0) * rate).ceil() as u64;
        Self {
            patch,
            generator,
            filter,
            sample_rate: rate,
            start_frame,
            stop_frame,
            next_frame: start_frame,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next_frame >= self.stop_frame
    }

    // Frames must be pulled in order, starting at `start_frame`.
    pub fn render_frame(&mut self) -> f32 {
        if self.is_finished() {
            return 0.0;
        }
        let t = self.next_frame as f64 / self.sample_rate;
        self.next_frame += 1;

        let raw = match &mut self.generator {
            Generator::Oscillator { waveform, phase } => {
                let out = waveform.sample(*phase);
                let freq = match &self.patch.source {
                    Source::Oscillator { frequency, .. } => frequency.value_at(t) as f64,
                    Source::Noise { .. } => 0.0,
                };
                *phase = (*phase + freq / self.sample_rate).rem_euclid(1.0);
                out
            }
            Generator::Noise(rng) => rng.gen_range(-1.0f32..1.0),
        };
        let filtered = match &mut self.filter {
            Some(f) => f.run(raw),
            None => raw,
        };
        filtered * self.patch.gain.value_at(t)
    }

    // Mix this voice into a planar buffer whose frame 0 sits at `offset`.
    pub fn render_into(&mut self, channels: &mut [Vec<f32>], offset: u64) {
        let len = channels.first().map_or(0, |c| c.len()) as u64;
        let end = self.stop_frame.min(offset + len);
        while self.next_frame < offset.min(end) {
            self.render_frame(); // started before this buffer
        }
        while self.next_frame < end {
            let idx = (self.next_frame - offset) as usize;
            let s = self.render_frame();
            for ch in channels.iter_mut() {
                ch[idx] += s;
            }
        }
    }
}

fn build_filter(spec: FilterSpec, sample_rate: u32) -> Option<DirectForm1<f32>> {
    let fs = sample_rate as f32;
    let cutoff = spec.frequency.clamp(1.0, fs * MAX_CUTOFF_RATIO);
    let kind = match spec.kind {
        FilterKind::LowPass => Type::LowPass,
        FilterKind::HighPass => Type::HighPass,
        FilterKind::BandPass => Type::BandPass,
    };
    match Coefficients::<f32>::from_params(kind, fs.hz(), cutoff.hz(), spec.q) {
        Ok(coeffs) => Some(DirectForm1::<f32>::new(coeffs)),
        Err(e) => {
            log::warn!("skipping filter {spec:?}: {e:?}");
            None
        }
    }
}
