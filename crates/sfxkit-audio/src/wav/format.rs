//! WAV file format parameters.

use crate::buffer::{BITS_PER_SAMPLE, CHANNELS};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// None when the rate does not fit the 32-bit header field.
    pub(crate) fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }
}
