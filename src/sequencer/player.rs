use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;

use crate::audio::{self, AudioHandle, LiveSink, NoteTable, SoundSink};
use crate::error::{Error, Result};
use crate::pipeline::{Catalog, PartType};

use super::clock::Clock;
use super::{Mix, StepClock, StepContext, Timing};

// Something that can open a fresh synthesis context. `Context` is whatever
// has to stay alive while sound plays; dropping it closes the context.
pub trait Backend {
    type Sink: SoundSink + Send + 'static;
    type Context;

    fn open(&mut self) -> Result<(Self::Context, Self::Sink)>;
}

// The default output device through cpal.
#[derive(Clone, Debug, Default)]
pub struct CpalBackend {
    pub seed: u64,
}

impl Backend for CpalBackend {
    type Sink = LiveSink;
    type Context = AudioHandle;

    fn open(&mut self) -> Result<(AudioHandle, LiveSink)> {
        audio::start_audio(self.seed)
    }
}

struct Running<X> {
    context: X,
    cancel: Sender<()>,
    ticker: JoinHandle<()>,
}

// Live preview: loops one pattern until stopped.
pub struct BeatPlayer<B: Backend, C: Clock> {
    backend: B,
    clock: C,
    catalog: Catalog,
    notes: NoteTable,
    mix: Mix,
    running: Option<Running<B::Context>>,
}

impl<B: Backend, C: Clock> BeatPlayer<B, C> {
    pub fn new(backend: B, clock: C, catalog: Catalog) -> Self {
        Self {
            backend,
            clock,
            catalog,
            notes: NoteTable::new(),
            mix: Mix::default(),
            running: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Restarts if already running. The tick interval is fixed for the run,
    // so a tempo change means calling start again.
    pub fn start<F>(&mut self, genre: &str, part: PartType, bpm: f64, mut on_beat: F) -> Result<()>
    where
        F: FnMut(u8) + Send + 'static,
    {
        if !(bpm.is_finite() && bpm > 0.0) {
            return Err(Error::Tempo(bpm));
        }
        self.stop();

        let config = self.catalog.genre(genre);
        let timing = Timing::new(bpm, config.swing);
        let pattern = config.pattern(part).clone();
        let key = config.key.clone();
        let notes = self.notes.clone();
        let mix = self.mix;
        let interval = Duration::from_secs_f64(timing.step_duration());

        let (context, mut sink) = self.backend.open()?;
        let (cancel, cancel_rx) = crossbeam_channel::bounded::<()>(1);
        let mut clock = self.clock.clone();

        let ticker = thread::Builder::new()
            .name("beat-clock".into())
            .spawn(move || {
                let ctx = StepContext { pattern: &pattern, timing, mix, notes: &notes };
                let mut steps = StepClock::new();
                while clock.wait_tick(interval, &cancel_rx) {
                    let step = steps.tick(&ctx, &mut sink);
                    on_beat(step);
                }
                log::debug!("beat clock stopped after {} ticks", steps.count());
            })?;

        log::info!("preview started: {key} {part} at {bpm} bpm");
        self.running = Some(Running { context, cancel, ticker });
        Ok(())
    }

    // Takes effect once the tick in flight (if any) has finished.
    pub fn stop(&mut self) {
        let Some(run) = self.running.take() else {
            return;
        };
        drop(run.cancel);
        if run.ticker.join().is_err() {
            log::error!("beat clock thread panicked");
        }
        drop(run.context);
        log::info!("preview stopped");
    }

    pub fn is_active(&self) -> bool {
        self.running.is_some()
    }
}

impl<B: Backend, C: Clock> Drop for BeatPlayer<B, C> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Patch, RecordingSink};
    use crate::sequencer::{ManualClock, ManualClockHandle};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // Records patches and counts how many contexts are opened and closed.
    #[derive(Clone, Default)]
    struct TestBackend {
        patches: Arc<Mutex<Vec<Patch>>>,
        opened: Arc<AtomicUsize>,
        closed: Arc<AtomicUsize>,
    }

    struct TestSink {
        inner: RecordingSink,
        patches: Arc<Mutex<Vec<Patch>>>,
    }

    impl SoundSink for TestSink {
        fn sample_rate(&self) -> u32 {
            self.inner.sample_rate
        }
        fn current_time(&self) -> f64 {
            self.inner.now
        }
        fn next_noise_seed(&mut self) -> u64 {
            self.inner.next_noise_seed()
        }
        fn play(&mut self, patch: Patch) {
            self.patches.lock().unwrap().push(patch);
        }
    }

    struct TestContext(Arc<AtomicUsize>);

    impl Drop for TestContext {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Backend for TestBackend {
        type Sink = TestSink;
        type Context = TestContext;

        fn open(&mut self) -> Result<(TestContext, TestSink)> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            let sink = TestSink {
                inner: RecordingSink::new(44_100, 0),
                patches: self.patches.clone(),
            };
            Ok((TestContext(self.closed.clone()), sink))
        }
    }

    fn player() -> (BeatPlayer<TestBackend, ManualClock>, TestBackend, ManualClockHandle) {
        let backend = TestBackend::default();
        let (clock, handle) = ManualClock::new();
        (BeatPlayer::new(backend.clone(), clock, Catalog::builtin()), backend, handle)
    }

    fn beats() -> (impl FnMut(u8) + Send + 'static, crossbeam_channel::Receiver<u8>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (move |step: u8| { let _ = tx.send(step); }, rx)
    }

    fn next_beats(rx: &crossbeam_channel::Receiver<u8>, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| rx.recv_timeout(Duration::from_secs(5)).expect("beat"))
            .collect()
    }

    #[test]
    fn ticks_report_steps_and_wrap() {
        let (mut player, _backend, clock) = player();
        let (on_beat, rx) = beats();
        player.start("pop", PartType::Verse, 120.0, on_beat).unwrap();
        assert!(player.is_active());

        clock.advance(18);
        let steps = next_beats(&rx, 18);
        let expected: Vec<u8> = (0..18).map(|i| i % 16).collect();
        assert_eq!(steps, expected);
        player.stop();
        assert!(!player.is_active());
    }

    #[test]
    fn ticks_schedule_the_pattern() {
        let (mut player, backend, clock) = player();
        let (on_beat, rx) = beats();
        player.start("pop", PartType::Verse, 120.0, on_beat).unwrap();

        // step 0 of the pop verse: kick, hihat and a bass note
        clock.advance(1);
        next_beats(&rx, 1);
        assert_eq!(backend.patches.lock().unwrap().len(), 3);

        // step 1 is empty
        clock.advance(1);
        next_beats(&rx, 1);
        assert_eq!(backend.patches.lock().unwrap().len(), 3);
    }

    #[test]
    fn stop_closes_the_context_and_restart_resets_the_counter() {
        let (mut player, backend, clock) = player();
        let (on_beat, rx) = beats();
        player.start("jazz", PartType::Chorus, 140.0, on_beat).unwrap();
        clock.advance(5);
        next_beats(&rx, 5);
        player.stop();
        assert_eq!(backend.closed.load(Ordering::SeqCst), 1);

        // stopping twice is harmless
        player.stop();
        assert_eq!(backend.closed.load(Ordering::SeqCst), 1);

        let (on_beat, rx) = beats();
        player.start("jazz", PartType::Chorus, 140.0, on_beat).unwrap();
        clock.advance(1);
        assert_eq!(next_beats(&rx, 1), vec![0]);
    }

    #[test]
    fn start_while_running_replaces_the_run() {
        let (mut player, backend, _clock) = player();
        player.start("rock", PartType::Intro, 130.0, |_| {}).unwrap();
        player.start("rock", PartType::Outro, 100.0, |_| {}).unwrap();
        assert!(player.is_active());
        assert_eq!(backend.opened.load(Ordering::SeqCst), 2);
        assert_eq!(backend.closed.load(Ordering::SeqCst), 1);

        drop(player);
        assert_eq!(backend.closed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn bad_tempo_is_rejected_without_opening_anything() {
        let (mut player, backend, _clock) = player();
        assert!(matches!(player.start("pop", PartType::Verse, 0.0, |_| {}), Err(Error::Tempo(_))));
        assert!(!player.is_active());
        assert_eq!(backend.opened.load(Ordering::SeqCst), 0);
    }
}
