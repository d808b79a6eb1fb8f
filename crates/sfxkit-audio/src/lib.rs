//! sfxkit Audio Backend
//!
//! This crate synthesizes short sound effects from sine tones and white
//! noise, shapes and joins them, and exports the result.
//!
//! # Overview
//!
//! All audio is mono signed 16-bit PCM held in a [`SampleBuffer`]. The
//! primitives are:
//!
//! - [`generate_tone`] - Sine tone at a frequency, duration, and dB volume
//! - [`generate_white_noise`] - Uniform white noise from a seeded PCG32
//! - [`silence`] - Zero samples
//! - [`fade_out`] - Linear ramp to zero over a trailing window
//! - [`concatenate`] - Join buffers that share a sample rate
//!
//! Recipes from `sfxkit-spec` are rendered with [`render_recipe`], and the
//! six built-in effects have `create_*` shortcuts.
//!
//! # Determinism
//!
//! Tones are deterministic. Noise depends only on the seed: segment `i` of a
//! recipe draws from a PCG32 stream seeded by BLAKE3 of `(seed, i)`. WAV
//! output carries no timestamps, so equal buffers give equal files.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sfxkit_audio::{create_success_sound, export, WavEncoder};
//!
//! let success = create_success_sound(44100)?;
//! assert_eq!(success.duration_ms(), 500.0);
//!
//! let file = export(&success, &WavEncoder, Path::new("se"), "success")?;
//! println!("PCM hash: {}", file.pcm_hash);
//! # Ok::<(), sfxkit_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Sample buffers, silence, fade-out, concatenation
//! - [`export`](mod@export) - Encoder trait and file export
//! - [`render`] - Recipe and preset rendering
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - Tone and noise generators
//! - [`wav`] - Deterministic WAV writer and reader

pub mod buffer;
pub mod error;
pub mod export;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{concatenate, fade_out, sample_count, silence, SampleBuffer};
pub use error::{AudioError, AudioResult};
pub use export::{export, Encoder, ExportedFile, WavEncoder};
pub use render::{
    create_bubuu_sound, create_door_knock, create_fail_sound, create_pinpon_sound,
    create_simple_beep, create_success_sound, render_preset, render_recipe, render_segment,
};
pub use synthesis::{generate_tone, generate_white_noise};
pub use wav::WavResult;
