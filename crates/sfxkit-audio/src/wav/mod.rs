//! Deterministic WAV file writer.
//!
//! This module writes 16-bit mono PCM WAV files with no timestamps or
//! variable metadata, so the same buffer always encodes to the same bytes.
//! The BLAKE3 hash of the PCM data identifies a clip independent of its
//! container.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, decode_wav, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, HEADER_SIZE, MAX_PCM_BYTES};
