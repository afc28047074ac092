use std::io::Cursor;
use std::path::Path;

use symphonia::core::audio::SampleBuffer as DecodedSamples;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::audio::SampleBuffer;
use crate::error::{Error, Result};

// Recorded takes arrive as container bytes. Plain WAV goes through hound,
// everything else (and WAV hound refuses) through symphonia's probe.
pub fn decode(bytes: &[u8]) -> Result<SampleBuffer> {
    if bytes.is_empty() {
        return Err(Error::decode("empty input"));
    }
    if is_riff_wave(bytes) {
        match decode_wav(bytes) {
            Ok(buffer) => return Ok(buffer),
            Err(e) => log::debug!("hound could not read the wav ({e}), probing instead"),
        }
    }
    decode_probed(bytes)
}

pub fn decode_file(path: &Path) -> Result<SampleBuffer> {
    let bytes = std::fs::read(path)?;
    decode(&bytes).map_err(|e| match e {
        Error::Decode(msg) => Error::Decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

fn is_riff_wave(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE"
}

fn decode_wav(bytes: &[u8]) -> Result<SampleBuffer> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).map_err(Error::decode)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::decode)?,
        hound::SampleFormat::Int => { // int, mirror of the encoder's asymmetric scaling
            let neg = (1i64 << (spec.bits_per_sample - 1)) as f32;
            let pos = neg - 1.0;
            reader
                .samples::<i32>()
                .map(|s| s.map(|x| if x < 0 { x as f32 / neg } else { x as f32 / pos }))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Error::decode)?
        }
    };

    Ok(SampleBuffer::from_interleaved(&samples, spec.channels as usize, spec.sample_rate))
}

fn decode_probed(bytes: &[u8]) -> Result<SampleBuffer> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());
    let probed = symphonia::default::get_probe()
        .format(&Hint::new(), mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(Error::decode)?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| Error::decode("no audio track"))?;
    let track_id = track.id;
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(Error::decode)?;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut scratch: Option<DecodedSamples<f32>> = None;
    let mut interleaved: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(_)) => break, // end of stream
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(Error::decode(e)),
        };
        if packet.track_id() != track_id {
            continue;
        }
        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                log::debug!("skipping corrupt packet: {e}");
                continue;
            }
            Err(e) => return Err(Error::decode(e)),
        };
        let spec = *decoded.spec();
        sample_rate.get_or_insert(spec.rate);
        channels.get_or_insert(spec.channels.count());

        let buf = scratch.get_or_insert_with(|| DecodedSamples::<f32>::new(decoded.capacity() as u64, spec));
        buf.copy_interleaved_ref(decoded);
        interleaved.extend_from_slice(buf.samples());
    }

    let (Some(sample_rate), Some(channels)) = (sample_rate, channels) else {
        return Err(Error::decode("stream has no decodable audio"));
    };
    Ok(SampleBuffer::from_interleaved(&interleaved, channels, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::encode_wav;
    use pretty_assertions::assert_eq;

    fn tone(channels: usize, len: usize, rate: u32) -> SampleBuffer {
        SampleBuffer {
            sample_rate: rate,
            channels: (0..channels)
                .map(|c| (0..len).map(|i| ((i + c * 7) as f32 * 0.05).sin() * 0.8).collect())
                .collect(),
        }
    }

    fn assert_close(a: &SampleBuffer, b: &SampleBuffer, tolerance: f32) {
        assert_eq!(a.sample_rate, b.sample_rate);
        assert_eq!(a.channel_count(), b.channel_count());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.channels.iter().zip(&b.channels) {
            for (s, t) in x.iter().zip(y) {
                assert!((s - t).abs() <= tolerance, "{s} vs {t}");
            }
        }
    }

    #[test]
    fn wav_round_trip_is_within_quantization() {
        let original = tone(2, 500, 44_100);
        let decoded = decode(&encode_wav(&original).unwrap()).unwrap();
        assert_close(&original, &decoded, 1.0 / 32_768.0 + 1e-6);
    }

    #[test]
    fn probe_path_reads_our_wavs_too() {
        let original = tone(1, 300, 22_050);
        let decoded = decode_probed(&encode_wav(&original).unwrap()).unwrap();
        // symphonia scales both signs by 32768
        assert_close(&original, &decoded, 2.0 / 32_768.0);
    }

    #[test]
    fn float_and_24_bit_wavs() {
        let mut float_bytes = Vec::new();
        {
            let spec = hound::WavSpec {
                channels: 1,
                sample_rate: 48_000,
                bits_per_sample: 32,
                sample_format: hound::SampleFormat::Float,
            };
            let mut w = hound::WavWriter::new(Cursor::new(&mut float_bytes), spec).unwrap();
            for s in [0.25f32, -0.5, 1.0] {
                w.write_sample(s).unwrap();
            }
            w.finalize().unwrap();
        }
        let buf = decode(&float_bytes).unwrap();
        assert_eq!(buf.channels, vec![vec![0.25, -0.5, 1.0]]);

        let mut int_bytes = Vec::new();
        {
            let spec = hound::WavSpec {
                channels: 2,
                sample_rate: 96_000,
                bits_per_sample: 24,
                sample_format: hound::SampleFormat::Int,
            };
            let mut w = hound::WavWriter::new(Cursor::new(&mut int_bytes), spec).unwrap();
            for s in [4_194_304i32, -8_388_608] {
                w.write_sample(s).unwrap();
            }
            w.finalize().unwrap();
        }
        let buf = decode(&int_bytes).unwrap();
        assert_eq!(buf.sample_rate, 96_000);
        assert_eq!(buf.channel_count(), 2);
        assert!((buf.channels[0][0] - 0.5).abs() < 1e-6);
        assert_eq!(buf.channels[1][0], -1.0);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode(b""), Err(Error::Decode(_))));
        assert!(matches!(decode(b"definitely not audio, just text"), Err(Error::Decode(_))));
        // RIFF magic with nothing behind it
        assert!(matches!(decode(b"RIFF\0\0\0\0WAVEfmt "), Err(Error::Decode(_))));
    }

    #[test]
    fn files_decode_and_missing_files_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("take.wav");
        std::fs::write(&path, encode_wav(&tone(1, 64, 8_000)).unwrap()).unwrap();
        assert_eq!(decode_file(&path).unwrap().len(), 64);
        assert!(matches!(decode_file(&dir.path().join("nope.wav")), Err(Error::Io(_))));
    }
}
