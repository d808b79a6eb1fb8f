//! White noise generator.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::buffer::{sample_count, SampleBuffer};

use super::{db_to_amplitude, to_pcm_sample};

/// Generates uniform white noise.
///
/// Each sample is drawn independently from [-1.0, 1.0], scaled by
/// `32767 * 10^(volume_db / 20)`, rounded, and clamped. Output is fully
/// determined by the state of `rng`.
pub fn generate_white_noise(
    duration_ms: u32,
    volume_db: f64,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> SampleBuffer {
    let num_samples = sample_count(sample_rate, duration_ms);
    let amplitude = db_to_amplitude(volume_db);

    let samples = (0..num_samples)
        .map(|_| to_pcm_sample(amplitude * rng.gen_range(-1.0_f64..=1.0)))
        .collect();

    SampleBuffer::new(samples, sample_rate)
}
