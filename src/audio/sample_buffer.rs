use crate::error::{Error, Result};

// Planar float audio: one Vec per channel, samples nominally in [-1, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    pub sample_rate: u32,
    pub channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    pub fn silent(channels: usize, length: usize, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; length]; channels],
        }
    }

    // frames, not samples
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    pub fn from_interleaved(samples: &[f32], channels: usize, sample_rate: u32) -> Self {
        let channels = channels.max(1);
        let mut planar = vec![Vec::with_capacity(samples.len() / channels); channels];
        for frame in samples.chunks_exact(channels) {
            for (ch, &s) in planar.iter_mut().zip(frame) {
                ch.push(s);
            }
        }
        Self { sample_rate, channels: planar }
    }

    // channel-major within each frame: L0 R0 L1 R1 ...
    // a channel shorter than the first reads as silence past its end
    pub fn interleave(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * self.channel_count());
        for i in 0..self.len() {
            for ch in &self.channels {
                out.push(ch.get(i).copied().unwrap_or(0.0));
            }
        }
        out
    }
}

// Glue buffers end to end. The result takes the first buffer's sample rate and
// the widest channel count; narrower buffers reuse their lowest channel for
// the missing ones, so a mono take plays on both sides of a stereo mix.
pub fn concatenate(buffers: &[SampleBuffer]) -> Result<SampleBuffer> {
    let first = buffers.first().ok_or(Error::EmptyInput)?;
    let total: usize = buffers.iter().map(SampleBuffer::len).sum();
    let width = buffers.iter().map(SampleBuffer::channel_count).max().unwrap_or(1).max(1);

    let mut channels = vec![Vec::with_capacity(total); width];
    for buffer in buffers {
        if buffer.sample_rate != first.sample_rate {
            log::warn!(
                "concatenating {} Hz audio into a {} Hz buffer without resampling",
                buffer.sample_rate,
                first.sample_rate
            );
        }
        for (idx, out) in channels.iter_mut().enumerate() {
            match buffer.channels.get(idx).or(buffer.channels.first()) {
                Some(src) => out.extend_from_slice(src),
                None => out.resize(out.len() + buffer.len(), 0.0), // channel-less buffer, nothing to copy
            }
        }
    }

    Ok(SampleBuffer { sample_rate: first.sample_rate, channels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ramp(channels: usize, len: usize, base: f32) -> SampleBuffer {
        SampleBuffer {
            sample_rate: 44_100,
            channels: (0..channels)
                .map(|c| (0..len).map(|i| base + c as f32 * 0.1 + i as f32 * 0.001).collect())
                .collect(),
        }
    }

    #[test]
    fn interleave_round_trip() {
        let buf = ramp(2, 4, 0.0);
        let flat = buf.interleave();
        assert_eq!(flat[0], buf.channels[0][0]);
        assert_eq!(flat[1], buf.channels[1][0]);
        assert_eq!(flat[2], buf.channels[0][1]);
        assert_eq!(SampleBuffer::from_interleaved(&flat, 2, 44_100), buf);
    }

    #[test]
    fn interleave_pads_a_short_channel_with_silence() {
        let buf = SampleBuffer {
            sample_rate: 8_000,
            channels: vec![vec![0.5, 0.25, 0.125], vec![-0.5]],
        };
        assert_eq!(buf.interleave(), vec![0.5, -0.5, 0.25, 0.0, 0.125, 0.0]);
    }

    #[test]
    fn concatenate_nothing_is_an_error() {
        assert!(matches!(concatenate(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn concatenated_length_is_the_sum_in_any_order() {
        let (a, b, c) = (ramp(1, 10, 0.0), ramp(2, 25, 0.5), ramp(1, 7, -0.5));
        let abc = concatenate(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let cab = concatenate(&[c, a, b]).unwrap();
        assert_eq!(abc.len(), 42);
        assert_eq!(cab.len(), 42);
        assert_ne!(abc, cab);
    }

    #[test]
    fn mono_is_duplicated_into_stereo() {
        let mono = ramp(1, 3, 0.2);
        let stereo = ramp(2, 2, -0.3);
        let out = concatenate(&[mono.clone(), stereo.clone()]).unwrap();
        assert_eq!(out.channel_count(), 2);
        assert_eq!(out.len(), 5);
        assert_eq!(&out.channels[0][..3], &mono.channels[0][..]);
        assert_eq!(&out.channels[1][..3], &mono.channels[0][..]);
        assert_eq!(&out.channels[0][3..], &stereo.channels[0][..]);
        assert_eq!(&out.channels[1][3..], &stereo.channels[1][..]);
    }

    #[test]
    fn first_sample_rate_wins() {
        let mut a = ramp(1, 4, 0.0);
        a.sample_rate = 48_000;
        let out = concatenate(&[a, ramp(1, 4, 0.0)]).unwrap();
        assert_eq!(out.sample_rate, 48_000);
    }

    #[test]
    fn duration_in_seconds() {
        let buf = SampleBuffer::silent(2, 22_050, 44_100);
        assert_eq!(buf.duration(), 0.5);
        assert!(!buf.is_empty());
    }
}
