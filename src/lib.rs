pub mod audio;
pub mod audio_api;
pub mod error;
pub mod loader;
pub mod middle;
pub mod pipeline;
pub mod sequencer;
pub mod shared;
pub mod tui;

pub use error::{Error, Result};
