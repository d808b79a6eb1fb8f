//! Sine tone generator.

use std::f64::consts::TAU;

use crate::buffer::{sample_count, SampleBuffer};

use super::{db_to_amplitude, to_pcm_sample};

/// Generates a pure sine tone.
///
/// Sample `i` is `round(A * sin(2 pi f i / sample_rate))` with
/// `A = 32767 * 10^(volume_db / 20)`, clamped to the i16 range. Inputs are
/// not validated: a zero sample rate gives an empty buffer and a negative
/// frequency gives a phase-inverted tone.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration_ms` - Duration in milliseconds
/// * `volume_db` - Volume in dB relative to full scale
/// * `sample_rate` - Sample rate in Hz
pub fn generate_tone(
    frequency: f64,
    duration_ms: u32,
    volume_db: f64,
    sample_rate: u32,
) -> SampleBuffer {
    let num_samples = sample_count(sample_rate, duration_ms);
    let amplitude = db_to_amplitude(volume_db);
    let phase_step = TAU * frequency / sample_rate as f64;

    let samples = (0..num_samples)
        .map(|i| to_pcm_sample(amplitude * (phase_step * i as f64).sin()))
        .collect();

    SampleBuffer::new(samples, sample_rate)
}
