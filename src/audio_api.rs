pub use crate::audio::Patch;

// Messages from the scheduling side to the real-time engine. Everything
// the engine renders arrives as a fully built patch so the callback never
// has to look anything up.
#[derive(Clone, Debug)]
pub enum AudioCommand {
    Play(Patch),

    // cut every sounding voice, used when a preview stops
    Silence,
}
