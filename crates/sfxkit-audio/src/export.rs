//! Exporting rendered buffers to files.
//!
//! The [`Encoder`] trait is the seam between synthesis and container
//! formats. [`WavEncoder`] is the only encoder shipped; compressed formats
//! can be added behind the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::wav::WavResult;

/// Turns a sample buffer into the bytes of an audio file.
pub trait Encoder {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Encodes the buffer.
    fn encode(&self, buffer: &SampleBuffer) -> AudioResult<Vec<u8>>;
}

/// Writes 16-bit mono PCM WAV.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl Encoder for WavEncoder {
    fn extension(&self) -> &'static str {
        "wav"
    }

    fn encode(&self, buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
        Ok(WavResult::from_buffer(buffer)?.wav_data)
    }
}

/// Summary of one written file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    /// Path of the written file.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub size_bytes: u64,
    /// Number of samples in the buffer.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// BLAKE3 hash of the little-endian PCM samples.
    pub pcm_hash: String,
}

/// Encodes `buffer` and writes it to `<out_dir>/<file_stem>.<extension>`.
///
/// `out_dir` is created if it does not exist. Any existing file at the
/// target path is replaced.
pub fn export(
    buffer: &SampleBuffer,
    encoder: &dyn Encoder,
    out_dir: &Path,
    file_stem: &str,
) -> AudioResult<ExportedFile> {
    let bytes = encoder.encode(buffer)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.{}", file_stem, encoder.extension()));
    fs::write(&path, &bytes)?;

    let pcm = crate::wav::samples_to_pcm16(buffer.samples());

    Ok(ExportedFile {
        path,
        size_bytes: bytes.len() as u64,
        num_samples: buffer.len(),
        sample_rate: buffer.sample_rate(),
        duration_ms: buffer.duration_ms(),
        pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
    })
}
