use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // input bytes weren't an audio container we can read
    #[error("could not decode audio: {0}")]
    Decode(String),

    #[error("no audio buffers to concatenate")]
    EmptyInput,

    // couldn't open an output device / synthesis context
    #[error("audio device error: {0}")]
    Device(String),

    #[error("tempo must be a positive number of beats per minute, got {0}")]
    Tempo(f64),

    #[error("could not encode WAV: {0}")]
    Encode(String),

    // more frames than a 16-bit WAV data chunk can address
    #[error("a render of {seconds}s at {sample_rate} Hz is too long for a WAV file")]
    TooLong { seconds: f64, sample_rate: u32 },

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn decode(msg: impl std::fmt::Display) -> Self {
        Error::Decode(msg.to_string())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Error::Catalog(msg.into())
    }
}
