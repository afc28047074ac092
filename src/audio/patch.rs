use super::automation::Automation;

// One scheduled sound: source -> optional filter -> gain -> destination.
// Voices describe themselves as patches; sinks decide where they render.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    pub source: Source,
    pub filter: Option<FilterSpec>,
    pub gain: Automation,
    pub start: f64, // seconds on the sink's timeline
    pub stop: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Oscillator { waveform: Waveform, frequency: Automation },
    Noise { seed: u64 }, // white noise, one value per frame
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

impl Waveform {
    // `phase` in [0, 1); every shape starts on a rising zero crossing
    pub fn sample(self, phase: f64) -> f32 {
        let p = phase as f32;
        match self {
            Waveform::Sine => (std::f32::consts::TAU * p).sin(),
            Waveform::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
            Waveform::Sawtooth => {
                if p < 0.5 { 2.0 * p } else { 2.0 * p - 2.0 }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
}

// lowpass/highpass carry 1 dB of resonance, a touch above butterworth
pub const DEFAULT_PASS_Q: f32 = 1.122_018_5; // 10^(1/20)

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    pub kind: FilterKind,
    pub frequency: f32,
    pub q: f32,
}

impl FilterSpec {
    pub fn lowpass(frequency: f32) -> Self {
        Self { kind: FilterKind::LowPass, frequency, q: DEFAULT_PASS_Q }
    }

    pub fn highpass(frequency: f32) -> Self {
        Self { kind: FilterKind::HighPass, frequency, q: DEFAULT_PASS_Q }
    }

    pub fn bandpass(frequency: f32, q: f32) -> Self {
        Self { kind: FilterKind::BandPass, frequency, q }
    }
}

impl Patch {
    pub fn oscillator(waveform: Waveform, frequency: Automation) -> PatchBuilder {
        PatchBuilder::new(Source::Oscillator { waveform, frequency })
    }

    pub fn noise(seed: u64) -> PatchBuilder {
        PatchBuilder::new(Source::Noise { seed })
    }

    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}

// Small builder so voice code reads like wiring a node graph.
pub struct PatchBuilder {
    source: Source,
    filter: Option<FilterSpec>,
    gain: Automation,
}

impl PatchBuilder {
    fn new(source: Source) -> Self {
        Self { source, filter: None, gain: Automation::new(1.0) }
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn gain(mut self, gain: Automation) -> Self {
        self.gain = gain;
        self
    }

    pub fn play(self, start: f64, stop: f64) -> Patch {
        Patch {
            source: self.source,
            filter: self.filter,
            gain: self.gain,
            start,
            stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveforms_start_at_zero_and_stay_in_range() {
        for wave in [Waveform::Sine, Waveform::Triangle, Waveform::Sawtooth] {
            assert!(wave.sample(0.0).abs() < 1e-6, "{wave:?}");
            for i in 0..100 {
                let s = wave.sample(i as f64 / 100.0);
                assert!((-1.0..=1.0).contains(&s), "{wave:?} out of range: {s}");
            }
        }
    }

    #[test]
    fn pass_filters_default_to_one_db_of_resonance() {
        assert!((DEFAULT_PASS_Q - 10f32.powf(1.0 / 20.0)).abs() < 1e-6);
        assert_eq!(FilterSpec::lowpass(400.0).q, DEFAULT_PASS_Q);
        assert_eq!(FilterSpec::highpass(7000.0).q, DEFAULT_PASS_Q);
        assert_eq!(FilterSpec::bandpass(2000.0, 1.0).q, 1.0);
    }

    #[test]
    fn triangle_and_saw_peaks() {
        assert!((Waveform::Triangle.sample(0.25) - 1.0).abs() < 1e-6);
        assert!((Waveform::Triangle.sample(0.75) + 1.0).abs() < 1e-6);
        assert!((Waveform::Sawtooth.sample(0.499) - 0.998).abs() < 1e-3);
        assert!((Waveform::Sawtooth.sample(0.5) + 1.0).abs() < 1e-6);
    }
}
