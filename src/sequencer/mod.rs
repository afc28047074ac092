// Timing model shared by live preview and offline render: 16 steps per bar,
// odd steps pushed late by swing. Both modes go through `schedule_step`, so
// a hit sounds the same whichever way it was scheduled.

use crate::audio::{drums, NoteTable, SoundSink};
use crate::pipeline::BeatPattern;
use crate::shared::{BEATS_PER_BAR, STEPS_PER_BAR};

pub mod clock;
pub mod player;
pub mod render;

pub use clock::{Clock, ManualClock, ManualClockHandle, SystemClock};
pub use player::{Backend, BeatPlayer, CpalBackend};
pub use render::{generate_backing_track, BackingTrackRequest, PendingRender, RenderPlan, RenderSettings};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub bpm: f64,
    pub swing: f64,
}

impl Timing {
    pub fn new(bpm: f64, swing: f64) -> Self {
        Self { bpm, swing }
    }

    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }

    // one 16th note
    pub fn step_duration(&self) -> f64 {
        self.beat_duration() / 4.0
    }

    pub fn bar_duration(&self) -> f64 {
        self.beat_duration() * BEATS_PER_BAR as f64
    }

    pub fn swing_offset(&self, step: u8) -> f64 {
        if step % 2 == 1 && self.swing > 0.0 {
            self.step_duration() * self.swing * 0.5
        } else {
            0.0
        }
    }

    // absolute onset of a step, swing included
    pub fn step_time(&self, bar: u32, step: u8) -> f64 {
        bar as f64 * self.bar_duration() + step as f64 * self.step_duration() + self.swing_offset(step)
    }

    // bass durations are fractions of a whole note
    pub fn note_length(&self, duration: f64) -> f64 {
        self.beat_duration() * duration * 4.0
    }
}

// Per-voice levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mix {
    pub kick: f32,
    pub snare: f32,
    pub hihat: f32,
    pub clap: f32,
    pub shaker: f32,
    pub bass: f32,
}

impl Default for Mix {
    fn default() -> Self {
        Self {
            kick: 0.8,
            snare: 0.6,
            hihat: 0.3,
            clap: 0.5,
            shaker: 0.2,
            bass: 0.5,
        }
    }
}

// Everything a step needs to turn into sound.
#[derive(Clone, Debug)]
pub struct StepContext<'a> {
    pub pattern: &'a BeatPattern,
    pub timing: Timing,
    pub mix: Mix,
    pub notes: &'a NoteTable,
}

// Schedule every voice active on `step` at `time`; returns how many hits fired.
pub fn schedule_step(ctx: &StepContext<'_>, step: u8, time: f64, sink: &mut dyn SoundSink) -> usize {
    let p = ctx.pattern;
    let mix = ctx.mix;
    let mut hits = 0;

    if p.kick.contains(&step) {
        drums::kick(sink, time, mix.kick);
        hits += 1;
    }
    if p.snare.contains(&step) {
        drums::snare(sink, time, mix.snare);
        hits += 1;
    }
    if p.hihat.contains(&step) {
        drums::hihat(sink, time, mix.hihat, false);
        hits += 1;
    }
    if p.open_hihat.contains(&step) {
        drums::hihat(sink, time, mix.hihat, true);
        hits += 1;
    }
    if p.clap.contains(&step) {
        drums::clap(sink, time, mix.clap);
        hits += 1;
    }
    if p.shaker.contains(&step) {
        drums::shaker(sink, time, mix.shaker);
        hits += 1;
    }
    if let Some(n) = p.bass_note_at(step) {
        let freq = ctx.notes.frequency(&n.note);
        drums::bass(sink, time, mix.bass, freq, ctx.timing.note_length(n.duration));
        hits += 1;
    }
    hits
}

// Live step counter. Counts up forever; the playing step is the count mod 16.
#[derive(Clone, Debug, Default)]
pub struct StepClock {
    count: u64,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    // Fire the current step relative to the sink's clock and advance.
    pub fn tick(&mut self, ctx: &StepContext<'_>, sink: &mut dyn SoundSink) -> u8 {
        let step = (self.count % STEPS_PER_BAR as u64) as u8;
        let time = sink.current_time() + ctx.timing.swing_offset(step);
        schedule_step(ctx, step, time, sink);
        self.count += 1;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Patch, RecordingSink};
    use crate::pipeline::{Catalog, PartType};
    use pretty_assertions::assert_eq;

    fn onsets(patches: &[Patch]) -> Vec<f64> {
        patches.iter().map(|p| p.start).collect()
    }

    #[test]
    fn step_and_bar_lengths() {
        let t = Timing::new(120.0, 0.0);
        assert_eq!(t.step_duration(), 0.125);
        assert_eq!(t.bar_duration(), 2.0);
        assert_eq!(t.note_length(0.25), 0.5);
        assert_eq!(t.step_time(2, 4), 4.5);
    }

    #[test]
    fn swing_only_moves_odd_steps() {
        let t = Timing::new(120.0, 0.3);
        let step = t.step_duration();
        assert_eq!(t.step_time(0, 0), 0.0);
        assert_eq!(t.swing_offset(0), 0.0);
        assert_eq!(t.swing_offset(2), 0.0);
        let shift = t.step_time(0, 1) - step;
        assert!((shift - step * 0.3 * 0.5).abs() < 1e-12);
        assert!((t.swing_offset(15) - step * 0.15).abs() < 1e-12);
    }

    #[test]
    fn schedule_step_fires_pattern_lanes() {
        let catalog = Catalog::builtin();
        let notes = NoteTable::new();
        let ctx = StepContext {
            pattern: catalog.pattern("pop", PartType::Chorus),
            timing: Timing::new(120.0, 0.0),
            mix: Mix::default(),
            notes: &notes,
        };
        let mut sink = RecordingSink::new(44_100, 0);
        // step 4: kick, snare, hihat, clap, bass E3
        let hits = schedule_step(&ctx, 4, 1.0, &mut sink);
        assert_eq!(hits, 5);
        // snare has two layers, clap three bursts
        assert_eq!(sink.patches.len(), 1 + 2 + 1 + 3 + 1);
        assert!(sink.patches.iter().all(|p| p.start >= 1.0));

        let mut quiet = RecordingSink::new(44_100, 0);
        assert_eq!(schedule_step(&ctx, 1, 0.0, &mut quiet), 0);
        assert!(quiet.patches.is_empty());
    }

    #[test]
    fn live_ticks_match_offline_onsets() {
        let catalog = Catalog::builtin();
        let notes = NoteTable::new();
        let genre = catalog.genre("r&b");
        let timing = Timing::new(92.0, genre.swing);
        let ctx = StepContext {
            pattern: genre.pattern(PartType::Chorus),
            timing,
            mix: Mix::default(),
            notes: &notes,
        };

        // live: the sink's clock advances one step per tick
        let mut live = RecordingSink::new(44_100, 5);
        let mut clock = StepClock::new();
        for i in 0..32u32 {
            live.now = (i / 16) as f64 * timing.bar_duration() + (i % 16) as f64 * timing.step_duration();
            clock.tick(&ctx, &mut live);
        }
        assert_eq!(clock.count(), 32);

        // offline: absolute timestamps for two bars
        let mut offline = RecordingSink::new(44_100, 5);
        for bar in 0..2 {
            for step in 0..16u8 {
                schedule_step(&ctx, step, timing.step_time(bar, step), &mut offline);
            }
        }

        assert_eq!(live.patches.len(), offline.patches.len());
        for (a, b) in onsets(&live.patches).iter().zip(onsets(&offline.patches)) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }
}
