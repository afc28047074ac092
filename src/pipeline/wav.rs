// Canonical 16-bit PCM WAV: a fixed 44-byte header followed by interleaved
// little-endian samples. Nothing variable goes in the header, so the same
// buffer always encodes to the same bytes.

use crate::audio::SampleBuffer;
use crate::error::{Error, Result};

pub const HEADER_LEN: usize = 44;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: usize = (BITS_PER_SAMPLE / 8) as usize;

// the RIFF size field (36 + data) has to fit in a u32
pub const MAX_DATA_LEN: u32 = u32::MAX - 36;

// asymmetric so both -1.0 and 1.0 land exactly on the i16 limits
pub fn to_pcm16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0) as i16
    } else {
        (s * 32767.0) as i16
    }
}

pub fn encode_wav(buffer: &SampleBuffer) -> Result<Vec<u8>> {
    let frames = buffer.len();
    if buffer.channels.iter().any(|ch| ch.len() != frames) {
        return Err(Error::Encode("channels have different lengths".into()));
    }
    let (channels, block_align) = u16::try_from(buffer.channel_count())
        .ok()
        .and_then(|c| Some((c, c.checked_mul(BYTES_PER_SAMPLE as u16)?)))
        .ok_or_else(|| Error::Encode(format!("{} channels", buffer.channel_count())))?;
    let byte_rate = buffer
        .sample_rate
        .checked_mul(block_align as u32)
        .ok_or_else(|| Error::Encode(format!("byte rate overflows at {} Hz", buffer.sample_rate)))?;
    let data_len = data_len(frames, block_align)
        .ok_or(Error::TooLong { seconds: buffer.duration(), sample_rate: buffer.sample_rate })?;

    let mut out = Vec::with_capacity(HEADER_LEN + data_len as usize);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&buffer.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for i in 0..frames {
        for ch in &buffer.channels {
            out.extend_from_slice(&to_pcm16(ch[i]).to_le_bytes());
        }
    }
    Ok(out)
}

fn data_len(frames: usize, block_align: u16) -> Option<u32> {
    frames
        .checked_mul(block_align as usize)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n <= MAX_DATA_LEN)
}
