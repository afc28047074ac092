// The six voices of the backing track, synthesized from scratch.
// Each one only builds patches; the sink decides whether they're heard live
// or rendered into a buffer.

use super::automation::Automation;
use super::patch::{FilterSpec, Patch, Waveform};
use super::sink::SoundSink;

// exponential ramps can't reach zero, decays stop just above it
pub const ENVELOPE_FLOOR: f32 = 0.001;

const KICK_LENGTH: f64 = 0.3;
const SNARE_NOISE_LENGTH: f64 = 0.2;
const SNARE_BODY_LENGTH: f64 = 0.1;
const CLOSED_HAT_LENGTH: f64 = 0.1;
const OPEN_HAT_LENGTH: f64 = 0.3;
const CLAP_BURSTS: usize = 3;
const CLAP_SPACING: f64 = 0.015;
const CLAP_BURST_LENGTH: f64 = 0.02;
const CLAP_DECAY: f64 = 0.15;
const SHAKER_LENGTH: f64 = 0.08;
const BASS_ATTACK: f64 = 0.01;
const BASS_RELEASE: f64 = 0.05;

// set `volume` at `time`, then decay exponentially to the floor
fn decay(volume: f32, time: f64, length: f64) -> Automation {
    Automation::new(1.0)
        .set_value_at(volume, time)
        .exponential_ramp_to(ENVELOPE_FLOOR, time + length)
}

fn sweep(from: f32, to: f32, time: f64, length: f64) -> Automation {
    Automation::new(440.0)
        .set_value_at(from, time)
        .exponential_ramp_to(to, time + length)
}

/// Sine dropping 150 -> 40 Hz in 50ms under a 300ms decay.
pub fn kick(sink: &mut dyn SoundSink, time: f64, volume: f32) {
    let patch = Patch::oscillator(Waveform::Sine, sweep(150.0, 40.0, time, 0.05))
        .gain(decay(volume, time, KICK_LENGTH))
        .play(time, time + KICK_LENGTH);
    sink.play(patch);
}

/// Band-passed noise plus a triangle body at half the level.
pub fn snare(sink: &mut dyn SoundSink, time: f64, volume: f32) {
    let noise = Patch::noise(sink.next_noise_seed())
        .filter(FilterSpec::bandpass(3000.0, 0.5))
        .gain(decay(volume, time, SNARE_NOISE_LENGTH))
        .play(time, time + SNARE_NOISE_LENGTH);
    sink.play(noise);

    let body = Patch::oscillator(Waveform::Triangle, sweep(180.0, 100.0, time, 0.05))
        .gain(decay(volume * 0.5, time, SNARE_BODY_LENGTH))
        .play(time, time + SNARE_BODY_LENGTH);
    sink.play(body);
}

pub fn hihat(sink: &mut dyn SoundSink, time: f64, volume: f32, open: bool) {
    let length = if open { OPEN_HAT_LENGTH } else { CLOSED_HAT_LENGTH };
    let patch = Patch::noise(sink.next_noise_seed())
        .filter(FilterSpec::highpass(7000.0))
        .gain(decay(volume, time, length))
        .play(time, time + length);
    sink.play(patch);
}

/// Three staggered 20ms noise bursts. The envelope is set for a longer
/// decay, but the noise itself runs out first.
pub fn clap(sink: &mut dyn SoundSink, time: f64, volume: f32) {
    for i in 0..CLAP_BURSTS {
        let start = time + i as f64 * CLAP_SPACING;
        let patch = Patch::noise(sink.next_noise_seed())
            .filter(FilterSpec::bandpass(2000.0, 1.0))
            .gain(decay(volume * 0.6, start, CLAP_DECAY))
            .play(start, start + CLAP_BURST_LENGTH);
        sink.play(patch);
    }
}

pub fn shaker(sink: &mut dyn SoundSink, time: f64, volume: f32) {
    let patch = Patch::noise(sink.next_noise_seed())
        .filter(FilterSpec::highpass(5000.0))
        .gain(decay(volume, time, SHAKER_LENGTH))
        .play(time, time + SHAKER_LENGTH);
    sink.play(patch);
}

/// Low-passed saw, linear attack and release; lasts exactly `length` seconds.
pub fn bass(sink: &mut dyn SoundSink, time: f64, volume: f32, frequency: f64, length: f64) {
    let gain = Automation::new(1.0)
        .set_value_at(0.0, time)
        .linear_ramp_to(volume, time + BASS_ATTACK)
        .set_value_at(volume, time + length - BASS_RELEASE)
        .linear_ramp_to(0.0, time + length);
    let patch = Patch::oscillator(Waveform::Sawtooth, Automation::new(440.0).set_value_at(frequency as f32, time))
        .filter(FilterSpec::lowpass(400.0))
        .gain(gain)
        .play(time, time + length);
    sink.play(patch);
}
