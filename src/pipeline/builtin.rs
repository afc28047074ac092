// Patterns shipped with the app. Step numbers are 16ths within one bar.

use super::catalog::{note, BeatPattern, GenreConfig, PartPatterns};

pub fn genres() -> Vec<GenreConfig> {
    vec![
        pop(),
        rnb(),
        afrobeat(),
        hip_hop(),
        rock(),
        jazz(),
        electronic(),
        reggae(),
        country(),
        folk(),
    ]
}

fn pop() -> GenreConfig {
    GenreConfig {
        key: "pop".into(),
        name: "Pop".into(),
        default_bpm: 120,
        swing: 0.0,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "C3", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "C3", 0.25),
                    note(8, "G3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 6, 8],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A3", 0.25),
                    note(8, "F3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "C3", 0.125),
                    note(4, "E3", 0.125),
                    note(8, "G3", 0.125),
                    note(12, "E3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "C3", 0.5)],
            },
        },
    }
}

fn rnb() -> GenreConfig {
    GenreConfig {
        key: "r&b".into(),
        name: "R&B".into(),
        default_bpm: 85,
        swing: 0.3,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 6],
                snare: vec![],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![2, 6, 10, 14],
                bass_notes: vec![note(0, "E3", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 6, 10],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "E3", 0.25),
                    note(6, "D3", 0.125),
                    note(10, "A3", 0.125),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![4, 12],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "F3", 0.25),
                    note(8, "G3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 6, 8, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![4, 12],
                shaker: vec![2, 10],
                bass_notes: vec![
                    note(0, "E3", 0.125),
                    note(4, "G3", 0.125),
                    note(8, "A3", 0.125),
                    note(12, "B3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![12],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "E3", 0.5)],
            },
        },
    }
}

fn afrobeat() -> GenreConfig {
    GenreConfig {
        key: "afrobeat".into(),
        name: "Afrobeat".into(),
        default_bpm: 105,
        swing: 0.2,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 6, 10],
                snare: vec![],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![note(0, "G3", 0.375)],
            },
            verse: BeatPattern {
                kick: vec![0, 3, 6, 10, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![2, 10],
                clap: vec![],
                shaker: vec![1, 3, 5, 7, 9, 11, 13, 15],
                bass_notes: vec![
                    note(0, "G3", 0.1875),
                    note(3, "A3", 0.1875),
                    note(6, "G3", 0.25),
                    note(10, "D3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 6, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![4, 12],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![
                    note(0, "A3", 0.25),
                    note(6, "B3", 0.125),
                    note(8, "G3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 3, 6, 8, 10, 14],
                snare: vec![4, 12],
                hihat: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                open_hihat: vec![4, 12],
                clap: vec![4, 12],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![
                    note(0, "G3", 0.125),
                    note(3, "A3", 0.125),
                    note(6, "B3", 0.125),
                    note(8, "A3", 0.125),
                    note(10, "G3", 0.125),
                    note(14, "D3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 6, 10],
                snare: vec![4],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 4, 8, 12],
                bass_notes: vec![note(0, "G3", 0.5)],
            },
        },
    }
}

fn hip_hop() -> GenreConfig {
    GenreConfig {
        key: "hip-hop".into(),
        name: "Hip-Hop".into(),
        default_bpm: 90,
        swing: 0.15,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 10],
                snare: vec![],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "E2", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 3, 8, 11],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "E2", 0.1875),
                    note(3, "E2", 0.3125),
                    note(8, "G2", 0.1875),
                    note(11, "A2", 0.3125),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 6, 8, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A2", 0.25),
                    note(8, "G2", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 3, 8, 11, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "E2", 0.1875),
                    note(3, "G2", 0.125),
                    note(8, "A2", 0.1875),
                    note(11, "G2", 0.125),
                    note(14, "E2", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "E2", 0.5)],
            },
        },
    }
}

fn rock() -> GenreConfig {
    GenreConfig {
        key: "rock".into(),
        name: "Rock".into(),
        default_bpm: 130,
        swing: 0.0,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "E3", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "E3", 0.25),
                    note(8, "A3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "D3", 0.25),
                    note(8, "E3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "E3", 0.125),
                    note(4, "G3", 0.125),
                    note(8, "A3", 0.125),
                    note(12, "B3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 4, 8],
                snare: vec![4, 12],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![12],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "E3", 0.5)],
            },
        },
    }
}

fn jazz() -> GenreConfig {
    GenreConfig {
        key: "jazz".into(),
        name: "Jazz".into(),
        default_bpm: 120,
        swing: 0.5,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 10],
                snare: vec![],
                hihat: vec![0, 3, 6, 9, 12, 15],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![2, 6, 10, 14],
                bass_notes: vec![note(0, "D3", 0.375)],
            },
            verse: BeatPattern {
                kick: vec![0, 10],
                snare: vec![6, 14],
                hihat: vec![0, 3, 6, 9, 12, 15],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "D3", 0.25),
                    note(6, "F3", 0.25),
                    note(10, "A3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 10, 14],
                hihat: vec![0, 3, 6, 9, 12, 15],
                open_hihat: vec![6, 12],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "G3", 0.25),
                    note(8, "B3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 6, 10],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![4, 10],
                clap: vec![],
                shaker: vec![1, 5, 9, 13],
                bass_notes: vec![
                    note(0, "D3", 0.1875),
                    note(4, "F3", 0.125),
                    note(6, "G3", 0.25),
                    note(10, "A3", 0.1875),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 10],
                snare: vec![6],
                hihat: vec![0, 6, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "D3", 0.5)],
            },
        },
    }
}

fn electronic() -> GenreConfig {
    GenreConfig {
        key: "electronic".into(),
        name: "Electronic".into(),
        default_bpm: 128,
        swing: 0.0,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![],
                hihat: vec![2, 6, 10, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "A2", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A2", 0.25),
                    note(8, "G2", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                open_hihat: vec![],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "F2", 0.25),
                    note(4, "G2", 0.125),
                    note(8, "A2", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                open_hihat: vec![2, 6, 10, 14],
                clap: vec![4, 12],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A2", 0.125),
                    note(4, "C3", 0.125),
                    note(8, "E3", 0.125),
                    note(12, "D3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![],
                hihat: vec![2, 6, 10, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "A2", 0.5)],
            },
        },
    }
}

fn reggae() -> GenreConfig {
    GenreConfig {
        key: "reggae".into(),
        name: "Reggae".into(),
        default_bpm: 75,
        swing: 0.1,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 10],
                snare: vec![],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "A2", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![6, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A2", 0.375),
                    note(6, "G2", 0.125),
                    note(8, "A2", 0.375),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 6, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![4, 12],
                clap: vec![],
                shaker: vec![2, 6, 10, 14],
                bass_notes: vec![
                    note(0, "D3", 0.375),
                    note(8, "E3", 0.375),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 6, 10, 14],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![4, 12],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "A2", 0.25),
                    note(6, "C3", 0.125),
                    note(10, "D3", 0.25),
                ],
            },
            outro: BeatPattern {
                kick: vec![6, 14],
                snare: vec![4],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "A2", 0.5)],
            },
        },
    }
}

fn country() -> GenreConfig {
    GenreConfig {
        key: "country".into(),
        name: "Country".into(),
        default_bpm: 110,
        swing: 0.1,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "G3", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "G3", 0.25),
                    note(4, "C3", 0.125),
                    note(8, "D3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![6, 14],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![
                    note(0, "C3", 0.25),
                    note(8, "G3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![0, 2, 4, 6, 8, 10, 12, 14],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![2, 6, 10, 14],
                bass_notes: vec![
                    note(0, "G3", 0.125),
                    note(4, "C3", 0.125),
                    note(8, "D3", 0.125),
                    note(12, "G3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![0, 4, 8, 12],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![],
                bass_notes: vec![note(0, "G3", 0.5)],
            },
        },
    }
}

fn folk() -> GenreConfig {
    GenreConfig {
        key: "folk".into(),
        name: "Folk".into(),
        default_bpm: 100,
        swing: 0.15,
        patterns: PartPatterns {
            intro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![],
                hihat: vec![],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![note(0, "D3", 0.5)],
            },
            verse: BeatPattern {
                kick: vec![0, 8],
                snare: vec![4, 12],
                hihat: vec![],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![
                    note(0, "D3", 0.25),
                    note(8, "A3", 0.25),
                ],
            },
            bridge: BeatPattern {
                kick: vec![0, 6, 8],
                snare: vec![4, 12],
                hihat: vec![],
                open_hihat: vec![],
                clap: vec![4, 12],
                shaker: vec![0, 2, 4, 6, 8, 10, 12, 14],
                bass_notes: vec![
                    note(0, "G3", 0.25),
                    note(8, "A3", 0.25),
                ],
            },
            chorus: BeatPattern {
                kick: vec![0, 4, 8, 12],
                snare: vec![4, 12],
                hihat: vec![],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                bass_notes: vec![
                    note(0, "D3", 0.125),
                    note(4, "G3", 0.125),
                    note(8, "A3", 0.125),
                    note(12, "G3", 0.125),
                ],
            },
            outro: BeatPattern {
                kick: vec![0, 8],
                snare: vec![],
                hihat: vec![],
                open_hihat: vec![],
                clap: vec![],
                shaker: vec![0, 4, 8, 12],
                bass_notes: vec![note(0, "D3", 0.5)],
            },
        },
    }
}
