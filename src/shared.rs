// Constants and the little vocabulary shared between the preview TUI and the
// middle layer.
//
// Preview keys:
//   Space         //  PlayPress (start / stop)
//   [ / ]         //  BpmDown / BpmUp (5 bpm, restarts a running preview)
//   g             //  NextGenre
//   p             //  NextPart
//   Esc / q       //  Quit
//
// The TUI only draws whatever `DisplayState` the middle layer hands it.

pub const STEPS_PER_BAR: usize = 16;
pub const BEATS_PER_BAR: usize = 4;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_CHANNELS: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PlayPress,
    BpmDown,
    BpmUp,
    NextGenre,
    NextPart,
    Quit,
}

#[derive(Clone, Debug)]
pub struct DisplayState {
    pub leds: [LedState; STEPS_PER_BAR],
    pub playing_step: Option<u8>, // last step the clock reported
    pub playing: bool,
    pub genre: String,
    pub part: String,
    pub bpm: u32,
    pub swing: f64,
    pub display_text: String, // status line
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedState {
    Off,
    OnMedium, // step has a kick or snare
    OnHigh,   // step currently playing
}
