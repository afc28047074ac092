use crossbeam_channel::{Receiver, Sender};

use crate::error::Result;
use crate::pipeline::PartType;
use crate::sequencer::{Backend, BeatPlayer, Clock};
use crate::shared::{DisplayState, InputEvent, LedState, STEPS_PER_BAR};

pub const BPM_STEP: f64 = 5.0;
pub const MIN_BPM: f64 = 40.0;
pub const MAX_BPM: f64 = 240.0;

// Sits between the TUI and the player: turns key events into player calls
// and keeps the state the screen draws from.
pub struct Middle<B: Backend, C: Clock> {
    player: BeatPlayer<B, C>,
    genre_index: usize,
    part: PartType,
    bpm: f64,
    beat_tx: Sender<u8>,
    beat_rx: Receiver<u8>,
    display: DisplayState,
}

impl<B: Backend, C: Clock> Middle<B, C> {
    // `bpm` defaults to the genre's own tempo
    pub fn new(player: BeatPlayer<B, C>, genre: &str, part: PartType, bpm: Option<f64>) -> Self {
        let catalog = player.catalog();
        let config = catalog.genre(genre);
        let genre_index = catalog.genres().iter().position(|g| g.key == config.key).unwrap_or(0);
        let bpm = bpm.unwrap_or(config.default_bpm as f64);
        let (beat_tx, beat_rx) = crossbeam_channel::unbounded();

        let mut middle = Self {
            player,
            genre_index,
            part,
            bpm,
            beat_tx,
            beat_rx,
            display: DisplayState {
                leds: [LedState::Off; STEPS_PER_BAR],
                playing_step: None,
                playing: false,
                genre: String::new(),
                part: String::new(),
                bpm: 0,
                swing: 0.0,
                display_text: String::new(),
            },
        };
        middle.refresh("stopped");
        middle
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_active()
    }

    // Returns false once the user asked to quit.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<bool> {
        match event {
            InputEvent::PlayPress => {
                if self.player.is_active() {
                    self.player.stop();
                    self.refresh("stopped");
                } else {
                    self.start()?;
                }
            }
            InputEvent::BpmDown => self.set_bpm(self.bpm - BPM_STEP)?,
            InputEvent::BpmUp => self.set_bpm(self.bpm + BPM_STEP)?,
            InputEvent::NextGenre => {
                let count = self.player.catalog().genres().len().max(1);
                self.genre_index = (self.genre_index + 1) % count;
                self.bpm = self.genre_key_bpm();
                self.restart_if_playing()?;
            }
            InputEvent::NextPart => {
                self.part = self.part.next();
                self.restart_if_playing()?;
            }
            InputEvent::Quit => {
                self.player.stop();
                return Ok(false);
            }
        }
        Ok(true)
    }

    // Pick up whatever beats the clock reported since the last frame.
    pub fn tick(&mut self) {
        let mut latest = None;
        while let Ok(step) = self.beat_rx.try_recv() {
            latest = Some(step);
        }
        if latest.is_some() {
            self.display.playing_step = latest;
            self.update_leds();
        }
    }

    fn genre_key(&self) -> String {
        self.player
            .catalog()
            .genres()
            .get(self.genre_index)
            .map(|g| g.key.clone())
            .unwrap_or_default()
    }

    fn genre_key_bpm(&self) -> f64 {
        self.player.catalog().default_bpm(&self.genre_key()) as f64
    }

    fn set_bpm(&mut self, bpm: f64) -> Result<()> {
        self.bpm = bpm.clamp(MIN_BPM, MAX_BPM);
        self.restart_if_playing()
    }

    // the tick interval is fixed per run, so changes need a fresh start
    fn restart_if_playing(&mut self) -> Result<()> {
        if self.player.is_active() {
            self.start()
        } else {
            self.refresh("stopped");
            Ok(())
        }
    }

    fn start(&mut self) -> Result<()> {
        while self.beat_rx.try_recv().is_ok() {} // stale beats from the last run
        let tx = self.beat_tx.clone();
        let genre = self.genre_key();
        self.player.start(&genre, self.part, self.bpm, move |step| {
            let _ = tx.send(step);
        })?;
        self.refresh("playing");
        Ok(())
    }

    fn refresh(&mut self, status: &str) {
        let catalog = self.player.catalog();
        let config = catalog.genre(&self.genre_key());
        self.display.genre = config.name.clone();
        self.display.swing = config.swing;
        self.display.part = self.part.to_string();
        self.display.bpm = self.bpm.round() as u32;
        self.display.playing = self.player.is_active();
        self.display.playing_step = None;
        self.display.display_text = status.to_string();
        self.update_leds();
    }

    fn update_leds(&mut self) {
        let config = self.player.catalog().genre(&self.genre_key());
        let pattern = config.pattern(self.part);
        for (i, led) in self.display.leds.iter_mut().enumerate() {
            let step = i as u8;
            *led = if self.display.playing && self.display.playing_step == Some(step) {
                LedState::OnHigh
            } else if pattern.kick.contains(&step) || pattern.snare.contains(&step) {
                LedState::OnMedium
            } else {
                LedState::Off
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingSink;
    use crate::pipeline::Catalog;
    use crate::sequencer::{ManualClock, ManualClockHandle};
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    struct SilentBackend;

    impl Backend for SilentBackend {
        type Sink = RecordingSink;
        type Context = ();

        fn open(&mut self) -> Result<((), RecordingSink)> {
            Ok(((), RecordingSink::new(44_100, 0)))
        }
    }

    fn middle(genre: &str) -> (Middle<SilentBackend, ManualClock>, ManualClockHandle) {
        let (clock, handle) = ManualClock::new();
        let player = BeatPlayer::new(SilentBackend, clock, Catalog::builtin());
        (Middle::new(player, genre, PartType::Verse, None), handle)
    }

    // beats arrive from another thread; poll until the screen catches up
    fn wait_for_step(m: &mut Middle<SilentBackend, ManualClock>, step: u8) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            m.tick();
            if m.display_state().playing_step == Some(step) {
                return;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        panic!("step {step} never showed up");
    }

    #[test]
    fn starts_with_the_genre_defaults() {
        let (m, _clock) = middle("Hip-Hop");
        let ds = m.display_state();
        assert_eq!(ds.genre, "Hip-Hop");
        assert_eq!(ds.bpm, 90);
        assert_eq!(ds.part, "verse");
        assert!(!ds.playing);
        // pattern steps with a kick or snare are lit
        assert!(ds.leds.iter().any(|l| *l == LedState::OnMedium));
        assert!(ds.leds.iter().all(|l| *l != LedState::OnHigh));
    }

    #[test]
    fn play_press_toggles_and_beats_light_the_current_step() {
        let (mut m, clock) = middle("pop");
        assert!(m.handle_input(InputEvent::PlayPress).unwrap());
        assert!(m.is_playing());
        assert!(m.display_state().playing);

        clock.advance(3);
        wait_for_step(&mut m, 2);
        assert_eq!(m.display_state().leds[2], LedState::OnHigh);

        m.handle_input(InputEvent::PlayPress).unwrap();
        assert!(!m.is_playing());
        assert_eq!(m.display_state().display_text, "stopped");
    }

    #[test]
    fn tempo_changes_are_clamped_and_restart_playback() {
        let (mut m, clock) = middle("reggae");
        m.handle_input(InputEvent::PlayPress).unwrap();
        clock.advance(4);
        wait_for_step(&mut m, 3);

        m.handle_input(InputEvent::BpmUp).unwrap();
        assert_eq!(m.display_state().bpm, 80);
        assert!(m.is_playing());
        // a restart counts from step 0 again
        clock.advance(1);
        wait_for_step(&mut m, 0);

        for _ in 0..40 {
            m.handle_input(InputEvent::BpmDown).unwrap();
        }
        assert_eq!(m.display_state().bpm, MIN_BPM as u32);
    }

    #[test]
    fn genre_and_part_cycle() {
        let (mut m, _clock) = middle("pop");
        m.handle_input(InputEvent::NextGenre).unwrap();
        assert_eq!(m.display_state().genre, "R&B");
        assert_eq!(m.display_state().bpm, 85);
        assert_eq!(m.display_state().swing, 0.3);

        m.handle_input(InputEvent::NextPart).unwrap();
        assert_eq!(m.display_state().part, "bridge");
        assert!(!m.is_playing());
    }

    #[test]
    fn quit_stops_playback() {
        let (mut m, _clock) = middle("rock");
        m.handle_input(InputEvent::PlayPress).unwrap();
        assert!(!m.handle_input(InputEvent::Quit).unwrap());
        assert!(!m.is_playing());
    }
}
