// JSON files on disk: custom catalogs and song manifests.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::catalog::{Catalog, PartType};
use crate::pipeline::song::Song;

// Parsing validates; a bad catalog file is an error, not a fallback.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let data = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&data)?;
    log::info!("loaded {} genres from {}", catalog.genres().len(), path.display());
    Ok(catalog)
}

// Save a catalog, making the parent dirs if they don't exist already
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    Ok(())
}

// {"genre": "rock", "tempo": 130, "parts": [{"type": "verse", "recording": "v1.wav"}]}
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SongManifest {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub tempo: Option<f64>, // genre default when missing
    #[serde(default)]
    pub parts: Vec<PartEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartEntry {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default)]
    pub recording: Option<PathBuf>, // relative to the manifest
}

// Recordings are read eagerly; a missing file fails the load.
pub fn load_song(path: &Path, catalog: &Catalog) -> Result<Song> {
    let data = std::fs::read_to_string(path)?;
    let manifest: SongManifest = serde_json::from_str(&data)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let genre = if manifest.genre.is_empty() {
        catalog.default_genre().key.clone()
    } else {
        manifest.genre
    };
    let tempo = manifest.tempo.unwrap_or_else(|| catalog.default_bpm(&genre) as f64);

    let mut song = Song::new(genre, tempo);
    for entry in manifest.parts {
        let id = song.add_part(PartType::parse_or_default(&entry.part_type));
        if let Some(rec) = entry.recording {
            let bytes = std::fs::read(base.join(rec))?;
            song.set_recording(&id, bytes);
        }
    }
    Ok(song)
}
