//! Core WAV writing functions.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical RIFF/fmt/data header.
pub const HEADER_SIZE: usize = 44;

/// Largest PCM payload a RIFF size field can describe.
pub const MAX_PCM_BYTES: usize = (u32::MAX as usize) - (HEADER_SIZE - 8);

/// Writes a complete WAV file to a writer.
///
/// No timestamps or optional chunks are written, so identical PCM always
/// produces identical bytes. Callers must keep `pcm_data` within
/// [`MAX_PCM_BYTES`]. Fails with `InvalidInput` when the byte rate of
/// `format` overflows its header field.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sample rate {} overflows the WAV byte rate", format.sample_rate),
        )
    })?;
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
