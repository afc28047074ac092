mod builtin;
pub mod catalog;
pub mod persistence;
pub mod song;
pub mod track;
pub mod wav;

pub use catalog::{BassNote, BeatPattern, Catalog, GenreConfig, PartPatterns, PartType, DEFAULT_GENRE};
pub use song::{PartFailure, Song, SongPart, DEFAULT_BARS};
pub use track::{format_duration, RenderedTrack, TrackFile};
pub use wav::{encode_wav, MAX_DATA_LEN};
