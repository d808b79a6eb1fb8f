//! Sine and white-noise synthesis.
//!
//! - `tone` - Pure sine tone at a fixed frequency
//! - `noise` - Uniform white noise from a seeded generator
//!
//! Both share the same sample-count rule and decibel-to-amplitude mapping,
//! and both clamp to the 16-bit range instead of wrapping.

pub mod noise;
pub mod tone;

use rand_pcg::Pcg32;
use sfxkit_spec::{NoiseSpec, ToneSpec};

use crate::buffer::SampleBuffer;

pub use noise::generate_white_noise;
pub use tone::generate_tone;

/// Peak 16-bit amplitude at 0 dB.
pub const FULL_SCALE: f64 = 32767.0;

/// Converts a decibel volume to a linear 16-bit amplitude.
pub fn db_to_amplitude(volume_db: f64) -> f64 {
    FULL_SCALE * 10f64.powf(volume_db / 20.0)
}

/// Rounds to the nearest integer and clamps to the i16 range.
pub fn to_pcm_sample(value: f64) -> i16 {
    value
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Common trait for anything that renders to a sample buffer.
pub trait Synthesizer {
    /// Renders the full buffer. Deterministic sources ignore `rng`.
    fn synthesize(&self, rng: &mut Pcg32) -> SampleBuffer;
}

impl Synthesizer for ToneSpec {
    fn synthesize(&self, _rng: &mut Pcg32) -> SampleBuffer {
        generate_tone(
            self.frequency,
            self.duration_ms,
            self.volume_db,
            self.sample_rate,
        )
    }
}

impl Synthesizer for NoiseSpec {
    fn synthesize(&self, rng: &mut Pcg32) -> SampleBuffer {
        generate_white_noise(self.duration_ms, self.volume_db, self.sample_rate, rng)
    }
}
