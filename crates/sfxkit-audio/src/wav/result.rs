//! WAV file generation result type.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec, MAX_PCM_BYTES};

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer as a mono 16-bit WAV file.
    ///
    /// Fails if the PCM payload is too large for a RIFF size field or the
    /// sample rate is too high for the byte-rate field.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let pcm = samples_to_pcm16(buffer.samples());
        if pcm.len() > MAX_PCM_BYTES {
            return Err(AudioError::encoding(format!(
                "{} bytes of PCM exceeds the WAV size limit",
                pcm.len()
            )));
        }

        let format = WavFormat::mono(buffer.sample_rate());
        if format.byte_rate().is_none() {
            return Err(AudioError::encoding(format!(
                "sample rate {} Hz is too high for a 16-bit WAV header",
                buffer.sample_rate()
            )));
        }

        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }
}
