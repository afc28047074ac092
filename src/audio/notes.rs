use std::collections::HashMap;

// used when a pattern names a note the table doesn't know
pub const FALLBACK_FREQUENCY: f64 = 130.81; // C3

// reaches down to C2 so the low hip-hop bass lines play at pitch rather than C3
const NOTES: [(&str, f64); 24] = [
    ("C2", 65.41),
    ("C#2", 69.30),
    ("D2", 73.42),
    ("D#2", 77.78),
    ("E2", 82.41),
    ("F2", 87.31),
    ("F#2", 92.50),
    ("G2", 98.00),
    ("G#2", 103.83),
    ("A2", 110.00),
    ("B2", 123.47),
    ("C3", 130.81),
    ("D3", 146.83),
    ("E3", 164.81),
    ("F3", 174.61),
    ("G3", 196.00),
    ("A3", 220.00),
    ("B3", 246.94),
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.00),
    ("A4", 440.00),
];

// Note name -> Hz. Built once and handed around by reference.
#[derive(Clone, Debug)]
pub struct NoteTable {
    freqs: HashMap<&'static str, f64>,
}

impl NoteTable {
    pub fn new() -> Self {
        Self { freqs: NOTES.into_iter().collect() }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.freqs.get(name).copied()
    }

    pub fn frequency(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(f) => f,
            None => {
                log::debug!("unknown note {name:?}, falling back to C3");
                FALLBACK_FREQUENCY
            }
        }
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::new()
    }
}
