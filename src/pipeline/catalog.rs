// The genre library: for every genre a tempo, a swing amount and one
// 16-step pattern per song part. The catalog is a plain value handed to
// whoever needs it, so tests and `--catalog` can swap in their own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shared::STEPS_PER_BAR;

use super::builtin;

pub const DEFAULT_GENRE: &str = "pop";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Intro,
    Verse,
    Bridge,
    Chorus,
    Outro,
}

impl PartType {
    pub const ALL: [PartType; 5] = [
        PartType::Intro,
        PartType::Verse,
        PartType::Bridge,
        PartType::Chorus,
        PartType::Outro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartType::Intro => "intro",
            PartType::Verse => "verse",
            PartType::Bridge => "bridge",
            PartType::Chorus => "chorus",
            PartType::Outro => "outro",
        }
    }

    // unknown names become a verse rather than an error
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown part type {name:?}, using verse");
            PartType::Verse
        })
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl FromStr for PartType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        PartType::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| Error::catalog(format!("unknown part type {s:?}")))
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BassNote {
    pub position: u8,
    pub note: String,
    pub duration: f64, // in whole notes: 0.25 is one beat
}

pub fn note(position: u8, note: &str, duration: f64) -> BassNote {
    BassNote { position, note: note.to_string(), duration }
}

// Active steps (0..16) per voice for one bar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeatPattern {
    pub kick: Vec<u8>,
    pub snare: Vec<u8>,
    pub hihat: Vec<u8>,
    pub open_hihat: Vec<u8>,
    pub clap: Vec<u8>,
    pub shaker: Vec<u8>,
    pub bass_notes: Vec<BassNote>,
}

impl BeatPattern {
    // first listed note wins if two share a step
    pub fn bass_note_at(&self, step: u8) -> Option<&BassNote> {
        self.bass_notes.iter().find(|n| n.position == step)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let lanes = [
            ("kick", &self.kick),
            ("snare", &self.snare),
            ("hihat", &self.hihat),
            ("openHihat", &self.open_hihat),
            ("clap", &self.clap),
            ("shaker", &self.shaker),
        ];
        for (lane, steps) in lanes {
            if let Some(bad) = steps.iter().find(|&&s| s as usize >= STEPS_PER_BAR) {
                return Err(format!("{lane} step {bad} is outside 0..{STEPS_PER_BAR}"));
            }
        }
        for n in &self.bass_notes {
            if n.position as usize >= STEPS_PER_BAR {
                return Err(format!("bass note {} at step {} is outside 0..{STEPS_PER_BAR}", n.note, n.position));
            }
            if !(n.duration > 0.0) {
                return Err(format!("bass note {} has non-positive duration {}", n.note, n.duration));
            }
        }
        Ok(())
    }
}

// One field per part type, so a genre can't leave one out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartPatterns {
    pub intro: BeatPattern,
    pub verse: BeatPattern,
    pub bridge: BeatPattern,
    pub chorus: BeatPattern,
    pub outro: BeatPattern,
}

impl PartPatterns {
    pub fn get(&self, part: PartType) -> &BeatPattern {
        match part {
            PartType::Intro => &self.intro,
            PartType::Verse => &self.verse,
            PartType::Bridge => &self.bridge,
            PartType::Chorus => &self.chorus,
            PartType::Outro => &self.outro,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreConfig {
    pub key: String, // lookup name, lowercase
    pub name: String, // display name
    pub default_bpm: u32,
    #[serde(default)]
    pub swing: f64, // fraction of a 16th that odd steps are pushed late
    pub patterns: PartPatterns,
}

impl GenreConfig {
    pub fn pattern(&self, part: PartType) -> &BeatPattern {
        self.patterns.get(part)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.default_bpm == 0 {
            return Err("default bpm must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.swing) {
            return Err(format!("swing {} is outside 0..=1", self.swing));
        }
        for part in PartType::ALL {
            self.pattern(part).validate().map_err(|e| format!("{part}: {e}"))?;
        }
        Ok(())
    }
}

// On-disk shape; a `Catalog` only exists once this has been validated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default = "default_genre_key")]
    pub default_genre: String,
    pub genres: Vec<GenreConfig>,
}

fn default_genre_key() -> String {
    DEFAULT_GENRE.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    genres: Vec<GenreConfig>,
    default_index: usize,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            genres: builtin::genres(),
            default_index: 0, // pop leads the builtin list
        }
    }

    pub fn new(default_genre: &str, mut genres: Vec<GenreConfig>) -> Result<Self> {
        for g in genres.iter_mut() {
            g.key = g.key.to_lowercase();
        }
        for (i, g) in genres.iter().enumerate() {
            g.validate().map_err(|e| Error::catalog(format!("genre {:?}: {e}", g.key)))?;
            if genres[..i].iter().any(|other| other.key == g.key) {
                return Err(Error::catalog(format!("genre {:?} is defined twice", g.key)));
            }
        }
        let wanted = default_genre.to_lowercase();
        let default_index = genres
            .iter()
            .position(|g| g.key == wanted)
            .ok_or_else(|| Error::catalog(format!("default genre {default_genre:?} is not defined")))?;
        Ok(Self { genres, default_index })
    }

    fn find(&self, name: &str) -> Option<&GenreConfig> {
        let wanted = name.trim().to_lowercase();
        self.genres.iter().find(|g| g.key == wanted)
    }

    pub fn default_genre(&self) -> &GenreConfig {
        &self.genres[self.default_index]
    }

    // Case-insensitive; anything unknown resolves to the default genre.
    pub fn genre(&self, name: &str) -> &GenreConfig {
        self.find(name).unwrap_or_else(|| {
            log::debug!("unknown genre {name:?}, using {}", self.default_genre().key);
            self.default_genre()
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn default_bpm(&self, name: &str) -> u32 {
        self.genre(name).default_bpm
    }

    pub fn pattern(&self, genre: &str, part: PartType) -> &BeatPattern {
        self.genre(genre).pattern(part)
    }

    pub fn genre_keys(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn genres(&self) -> &[GenreConfig] {
        &self.genres
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Catalog::new(&file.default_genre, file.genres)
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        let default_genre = catalog.default_genre().key.clone();
        CatalogFile { default_genre, genres: catalog.genres }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_covers_every_genre() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.genre_keys(),
            vec!["pop", "r&b", "afrobeat", "hip-hop", "rock", "jazz", "electronic", "reggae", "country", "folk"]
        );
        assert_eq!(catalog.default_genre().key, "pop");
    }

    #[test]
    fn builtin_passes_validation() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(DEFAULT_GENRE, catalog.genres().to_vec()).unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn lookup_is_case_insensitive_with_pop_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.genre("PoP"), catalog.genre("pop"));
        assert_eq!(catalog.genre("nonexistent-genre"), catalog.genre("pop"));
        assert_eq!(catalog.genre("Hip-Hop").name, "Hip-Hop");
        assert_eq!(catalog.genre("R&B").swing, 0.3);
        assert!(!catalog.contains("polka"));
    }

    #[test]
    fn default_bpm_follows_the_same_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_bpm("jazz"), 120);
        assert_eq!(catalog.default_bpm("REGGAE"), 75);
        assert_eq!(catalog.default_bpm("???"), catalog.default_bpm("pop"));
    }

    #[test]
    fn electronic_chorus_is_four_on_the_floor() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.pattern("electronic", PartType::Chorus).kick, vec![0, 4, 8, 12]);
    }

    #[test]
    fn first_bass_note_wins_on_shared_step() {
        let pattern = BeatPattern {
            bass_notes: vec![note(4, "E3", 0.25), note(4, "A3", 0.5)],
            ..Default::default()
        };
        assert_eq!(pattern.bass_note_at(4).map(|n| n.note.as_str()), Some("E3"));
        assert_eq!(pattern.bass_note_at(5), None);
    }

    #[test]
    fn part_type_parsing() {
        assert_eq!("Chorus".parse::<PartType>().unwrap(), PartType::Chorus);
        assert!("solo".parse::<PartType>().is_err());
        assert_eq!(PartType::parse_or_default("solo"), PartType::Verse);
        assert_eq!(PartType::Outro.next(), PartType::Intro);
    }

    #[test]
    fn rejects_out_of_range_steps() {
        let mut genres = Catalog::builtin().genres().to_vec();
        genres[3].patterns.bridge.clap.push(16);
        let err = Catalog::new(DEFAULT_GENRE, genres).unwrap_err();
        assert!(err.to_string().contains("hip-hop"), "{err}");
    }

    #[test]
    fn rejects_missing_default_and_duplicates() {
        let genres = Catalog::builtin().genres().to_vec();
        assert!(Catalog::new("polka", genres.clone()).is_err());
        let mut doubled = genres.clone();
        doubled.push(genres[0].clone());
        assert!(Catalog::new(DEFAULT_GENRE, doubled).is_err());
    }

    #[test]
    fn json_round_trip_keeps_patterns() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"openHihat\""));
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn json_with_bad_swing_is_rejected() {
        let mut file = CatalogFile::from(Catalog::builtin());
        file.genres[0].swing = 1.5;
        let json = serde_json::to_string(&file).unwrap();
        assert!(serde_json::from_str::<Catalog>(&json).is_err());
    }
}
