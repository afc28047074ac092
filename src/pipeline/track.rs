use std::path::{Path, PathBuf};

use crate::audio::SampleBuffer;
use crate::error::Result;

use super::wav;

// A finished piece of audio together with its WAV encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedTrack {
    pub buffer: SampleBuffer,
    pub wav: Vec<u8>,
}

impl RenderedTrack {
    pub fn new(buffer: SampleBuffer) -> Result<Self> {
        let wav = wav::encode_wav(&buffer)?;
        Ok(Self { buffer, wav })
    }

    pub fn duration(&self) -> f64 {
        self.buffer.duration()
    }

    // Write the WAV as `<dir>/<name>.wav`. The file stays until released.
    pub fn export(&self, dir: &Path, name: &str) -> Result<TrackFile> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.wav", file_stem(name)));
        std::fs::write(&path, &self.wav)?;
        log::info!("wrote {} ({} bytes, {})", path.display(), self.wav.len(), format_duration(self.duration()));
        Ok(TrackFile { path })
    }
}

// An exported track on disk. Nothing removes it implicitly; call `release`.
#[derive(Debug, PartialEq, Eq)]
pub struct TrackFile {
    path: PathBuf,
}

impl TrackFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn release(self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()), // already gone
            Err(e) => Err(e.into()),
        }
    }
}

// keep names filesystem-safe: "R&B / Chorus" -> "r-b-chorus"
fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('-') && !stem.is_empty() {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    if stem.is_empty() { "track".to_string() } else { stem.to_string() }
}

// "m:ss", seconds truncated
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds.floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}
