//! Mono 16-bit sample buffers and the operations that compose them.
//!
//! Buffers are never mutated after construction: [`fade_out`] and
//! [`concatenate`] build new buffers from their inputs.

use crate::error::{AudioError, AudioResult};

/// Number of channels in every buffer.
pub const CHANNELS: u16 = 1;

/// Bits per sample in every buffer.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Number of samples covering `duration_ms` at `sample_rate`, rounded down.
pub fn sample_count(sample_rate: u32, duration_ms: u32) -> usize {
    (sample_rate as u64 * duration_ms as u64 / 1000) as usize
}

/// A finite run of mono signed 16-bit PCM samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps raw samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count; always mono.
    pub fn channels(&self) -> u16 {
        CHANNELS
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in milliseconds. Zero when the sample rate is zero.
    pub fn duration_ms(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Produces `duration_ms` worth of zero samples.
pub fn silence(duration_ms: u32, sample_rate: u32) -> SampleBuffer {
    SampleBuffer::new(vec![0; sample_count(sample_rate, duration_ms)], sample_rate)
}

/// Ramps the last `fade_ms` of `buffer` linearly from full gain to zero.
///
/// The first faded sample keeps its value and the final sample becomes 0.
/// A fade longer than the buffer fades the whole buffer.
pub fn fade_out(buffer: &SampleBuffer, fade_ms: u32) -> SampleBuffer {
    let mut samples = buffer.samples.clone();
    let fade_len = sample_count(buffer.sample_rate, fade_ms).min(samples.len());
    if fade_len == 0 {
        return SampleBuffer::new(samples, buffer.sample_rate);
    }

    let start = samples.len() - fade_len;
    let steps = (fade_len - 1) as f64;
    for (j, sample) in samples[start..].iter_mut().enumerate() {
        let gain = if fade_len == 1 {
            0.0
        } else {
            (fade_len - 1 - j) as f64 / steps
        };
        *sample = (*sample as f64 * gain).round() as i16;
    }

    SampleBuffer::new(samples, buffer.sample_rate)
}

/// Joins buffers in order.
///
/// Every buffer must share the first buffer's sample rate.
pub fn concatenate(buffers: &[SampleBuffer]) -> AudioResult<SampleBuffer> {
    let first = buffers.first().ok_or(AudioError::EmptyConcatenation)?;
    let sample_rate = first.sample_rate;

    let mut total = 0;
    for buffer in buffers {
        if buffer.sample_rate != sample_rate {
            return Err(AudioError::SampleRateMismatch {
                expected: sample_rate,
                found: buffer.sample_rate,
            });
        }
        total += buffer.len();
    }

    let mut samples = Vec::with_capacity(total);
    for buffer in buffers {
        samples.extend_from_slice(&buffer.samples);
    }

    Ok(SampleBuffer::new(samples, sample_rate))
}
