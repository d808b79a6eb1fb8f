//! Reading PCM back out of WAV files, and hashing it.

use std::io::Cursor;

use crate::buffer::{SampleBuffer, BITS_PER_SAMPLE, CHANNELS};

/// Iterates over the RIFF chunks of a WAVE file as `(id, body)` pairs.
///
/// Stops at the first truncated chunk. Returns an empty iterator when the
/// RIFF/WAVE signature is missing.
fn chunks<'a>(wav_data: &'a [u8]) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
    let valid = wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE";
    let mut pos = if valid { 12 } else { wav_data.len() };

    std::iter::from_fn(move || {
        if pos + 8 > wav_data.len() {
            return None;
        }
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if body_end > wav_data.len() {
            return None;
        }

        pos = body_end;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
        Some((chunk_id, &wav_data[body_start..body_end]))
    })
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }
    chunks(wav_data).find_map(|(id, body)| (id == b"data").then_some(body))
}

/// Computes the BLAKE3 hash of a WAV file's PCM data.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes a mono 16-bit PCM WAV file back into a sample buffer.
///
/// Returns None for anything this crate would not have written: other
/// channel counts, bit depths, float samples, or a malformed file.
pub fn decode_wav(wav_data: &[u8]) -> Option<SampleBuffer> {
    let reader = hound::WavReader::new(Cursor::new(wav_data)).ok()?;
    let spec = reader.spec();
    if spec.channels != CHANNELS
        || spec.bits_per_sample != BITS_PER_SAMPLE
        || spec.sample_format != hound::SampleFormat::Int
    {
        return None;
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<i16>, _>>()
        .ok()?;
    Some(SampleBuffer::new(samples, spec.sample_rate))
}
