// A song is an ordered list of parts, each with an optional vocal take and,
// once generated, its own backing track. Rendering a backing track per part
// and stitching the takes together are independent steps.

use crate::audio::{concatenate, SampleBuffer};
use crate::error::{Error, Result};
use crate::loader::sample_loader;
use crate::sequencer::{generate_backing_track, BackingTrackRequest, RenderSettings};

use super::catalog::{Catalog, PartType};
use super::track::RenderedTrack;

pub const DEFAULT_BARS: u32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct SongPart {
    pub id: String,
    pub part_type: PartType,
    pub label: String, // "Verse", "Verse 2", ...
    pub recording: Option<Vec<u8>>, // container bytes as recorded
    pub order: usize,
    pub backing: Option<RenderedTrack>,
}

// A part whose backing track could not be rendered. The rest still were.
#[derive(Debug)]
pub struct PartFailure {
    pub part_id: String,
    pub label: String,
    pub error: Error,
}

#[derive(Clone, Debug)]
pub struct Song {
    pub genre: String,
    pub tempo: f64,
    parts: Vec<SongPart>,
    next_id: u64,
}

impl Song {
    pub fn new(genre: impl Into<String>, tempo: f64) -> Self {
        Self {
            genre: genre.into(),
            tempo,
            parts: Vec::new(),
            next_id: 0,
        }
    }

    // in playing order
    pub fn parts(&self) -> &[SongPart] {
        &self.parts
    }

    pub fn part(&self, id: &str) -> Option<&SongPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    fn part_mut(&mut self, id: &str) -> Option<&mut SongPart> {
        self.parts.iter_mut().find(|p| p.id == id)
    }

    // Appends a part and returns its id. Repeated types get numbered labels.
    pub fn add_part(&mut self, part_type: PartType) -> String {
        let same = self.parts.iter().filter(|p| p.part_type == part_type).count();
        let name = capitalize(part_type.as_str());
        let label = if same > 0 { format!("{name} {}", same + 1) } else { name };
        let id = format!("{part_type}-{}", self.next_id);
        self.next_id += 1;

        self.parts.push(SongPart {
            id: id.clone(),
            part_type,
            label,
            recording: None,
            order: self.parts.len(),
            backing: None,
        });
        id
    }

    pub fn remove_part(&mut self, id: &str) -> bool {
        let before = self.parts.len();
        self.parts.retain(|p| p.id != id);
        self.renumber();
        self.parts.len() != before
    }

    // Move a part to `index` (clamped to the end).
    pub fn reorder(&mut self, id: &str, index: usize) -> bool {
        let Some(from) = self.parts.iter().position(|p| p.id == id) else {
            return false;
        };
        let part = self.parts.remove(from);
        let index = index.min(self.parts.len());
        self.parts.insert(index, part);
        self.renumber();
        true
    }

    pub fn set_recording(&mut self, id: &str, bytes: Vec<u8>) -> bool {
        match self.part_mut(id) {
            Some(part) => {
                part.recording = Some(bytes);
                true
            }
            None => false,
        }
    }

    fn renumber(&mut self) {
        for (i, p) in self.parts.iter_mut().enumerate() {
            p.order = i;
        }
    }

    pub fn generate_backing_tracks(
        &mut self,
        catalog: &Catalog,
        bars: u32,
        settings: RenderSettings,
    ) -> Vec<PartFailure> {
        self.generate_backing_tracks_with(bars, |request| generate_backing_track(catalog, request, settings))
    }

    // One render per part; a failing part is reported and skipped.
    pub fn generate_backing_tracks_with<F>(&mut self, bars: u32, mut render: F) -> Vec<PartFailure>
    where
        F: FnMut(&BackingTrackRequest) -> Result<RenderedTrack>,
    {
        let mut failures = Vec::new();
        for part in self.parts.iter_mut() {
            let request = BackingTrackRequest::new(self.genre.clone(), part.part_type, self.tempo, bars);
            match render(&request) {
                Ok(track) => {
                    log::debug!("backing track for {}: {:.2}s", part.label, track.duration());
                    part.backing = Some(track);
                }
                Err(error) => {
                    log::warn!("backing track for {} failed: {error}", part.label);
                    failures.push(PartFailure {
                        part_id: part.id.clone(),
                        label: part.label.clone(),
                        error,
                    });
                }
            }
        }
        failures
    }

    // Decode every recorded take in order and join them into one track.
    pub fn assemble_vocals(&self) -> Result<RenderedTrack> {
        let mut buffers: Vec<SampleBuffer> = Vec::new();
        for part in &self.parts {
            if let Some(bytes) = &part.recording {
                let buffer = sample_loader::decode(bytes).map_err(|e| match e {
                    Error::Decode(msg) => Error::Decode(format!("{}: {msg}", part.label)),
                    other => other,
                })?;
                buffers.push(buffer);
            }
        }
        let combined = concatenate(&buffers)?;
        log::info!("assembled {} takes into {:.2}s of audio", buffers.len(), combined.duration());
        RenderedTrack::new(combined)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
