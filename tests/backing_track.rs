use mozart::audio::{concatenate, SampleBuffer};
use mozart::loader;
use mozart::pipeline::{encode_wav, persistence, Catalog, PartType, Song};
use mozart::sequencer::{generate_backing_track, BackingTrackRequest, RenderSettings};
use pretty_assertions::assert_eq;

fn settings() -> RenderSettings {
    RenderSettings { sample_rate: 11_025, ..RenderSettings::default() }
}

#[test]
fn every_builtin_genre_and_part_renders() {
    let catalog = Catalog::builtin();
    for key in catalog.genre_keys() {
        for part in PartType::ALL {
            let req = BackingTrackRequest::new(key, part, catalog.default_bpm(key) as f64, 1);
            let track = generate_backing_track(&catalog, &req, settings()).unwrap();
            assert!(!track.buffer.is_empty(), "{key} {part}");
            let peak = track.buffer.channels[0].iter().fold(0.0f32, |m, s| m.max(s.abs()));
            assert!(peak > 0.01, "{key} {part} is silent");
            assert!(track.buffer.channels.iter().flatten().all(|s| s.is_finite()));
        }
    }
}

#[test]
fn lookups_are_case_insensitive_with_a_pop_fallback() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.genre("PoP"), catalog.genre("pop"));
    assert_eq!(catalog.genre("nonexistent-genre"), catalog.genre("pop"));
    assert_eq!(catalog.default_bpm("nonexistent-genre"), 120);
    assert_eq!(catalog.genre_keys().len(), 10);
}

#[test]
fn rendered_tracks_decode_back() {
    let catalog = Catalog::builtin();
    let req = BackingTrackRequest::new("folk", PartType::Verse, 100.0, 1);
    let track = generate_backing_track(&catalog, &req, settings()).unwrap();
    let decoded = loader::decode(&track.wav).unwrap();
    assert_eq!(decoded.sample_rate, 11_025);
    assert_eq!(decoded.channel_count(), 2);
    assert_eq!(decoded.len(), track.buffer.len());
    for (a, b) in track.buffer.channels[1].iter().zip(&decoded.channels[1]) {
        assert!((a.clamp(-1.0, 1.0) - b).abs() <= 1.0 / 32_768.0 + 1e-6);
    }
}

#[test]
fn mono_takes_are_upmixed_next_to_stereo_backing() {
    let mono = SampleBuffer { sample_rate: 11_025, channels: vec![vec![0.5; 100]] };
    let catalog = Catalog::builtin();
    let req = BackingTrackRequest::new("jazz", PartType::Intro, 120.0, 1);
    let backing = generate_backing_track(&catalog, &req, settings()).unwrap().buffer;

    let joined = concatenate(&[mono.clone(), backing.clone()]).unwrap();
    assert_eq!(joined.channel_count(), 2);
    assert_eq!(joined.len(), 100 + backing.len());
    assert_eq!(&joined.channels[1][..100], &mono.channels[0][..]);
}

#[test]
fn song_from_manifest_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let take = SampleBuffer { sample_rate: 11_025, channels: vec![vec![0.1; 2_000]] };
    std::fs::write(dir.path().join("verse.wav"), encode_wav(&take).unwrap()).unwrap();
    std::fs::write(dir.path().join("chorus.wav"), encode_wav(&take).unwrap()).unwrap();
    std::fs::write(
        dir.path().join("song.json"),
        r#"{"genre": "country", "tempo": 110, "parts": [
            {"type": "verse", "recording": "verse.wav"},
            {"type": "chorus", "recording": "chorus.wav"},
            {"type": "outro"}
        ]}"#,
    )
    .unwrap();

    let catalog = Catalog::builtin();
    let mut song: Song = persistence::load_song(&dir.path().join("song.json"), &catalog).unwrap();
    let failures = song.generate_backing_tracks(&catalog, 2, settings());
    assert!(failures.is_empty());
    assert!(song.parts().iter().all(|p| p.backing.is_some()));

    let vocals = song.assemble_vocals().unwrap();
    assert_eq!(vocals.buffer.len(), 4_000);

    let out = dir.path().join("out");
    let file = vocals.export(&out, "vocals").unwrap();
    assert!(file.path().exists());
    file.release().unwrap();
    assert!(!out.join("vocals.wav").exists());
}
