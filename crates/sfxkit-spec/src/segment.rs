//! Tone, noise, and silence segment types.
//!
//! A recipe is an ordered list of segments. Each segment renders to one
//! mono buffer at the recipe's sample rate; the buffers are then joined.

use serde::{Deserialize, Serialize};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

pub(crate) fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// Parameters for a pure sine tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneSpec {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Volume in decibels relative to full scale (typically negative).
    pub volume_db: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl ToneSpec {
    /// Creates a tone spec at the default sample rate.
    pub fn new(frequency: f64, duration_ms: u32, volume_db: f64) -> Self {
        Self {
            frequency,
            duration_ms,
            volume_db,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the sample rate.
    pub fn at_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// Parameters for uniform white noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseSpec {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Volume in decibels relative to full scale.
    pub volume_db: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl NoiseSpec {
    /// Creates a noise spec at the default sample rate.
    pub fn new(duration_ms: u32, volume_db: f64) -> Self {
        Self {
            duration_ms,
            volume_db,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the sample rate.
    pub fn at_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// One step of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Segment {
    /// Sine tone.
    Tone {
        /// Frequency in Hz.
        frequency: f64,
        /// Duration in milliseconds.
        duration_ms: u32,
        /// Volume in dB.
        volume_db: f64,
        /// Optional trailing fade-out in milliseconds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fade_out_ms: Option<u32>,
    },
    /// White noise burst.
    Noise {
        /// Duration in milliseconds.
        duration_ms: u32,
        /// Volume in dB.
        volume_db: f64,
        /// Optional trailing fade-out in milliseconds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fade_out_ms: Option<u32>,
    },
    /// Digital silence.
    Silence {
        /// Duration in milliseconds.
        duration_ms: u32,
    },
}

impl Segment {
    /// Creates a tone segment without fade.
    pub fn tone(frequency: f64, duration_ms: u32, volume_db: f64) -> Self {
        Segment::Tone {
            frequency,
            duration_ms,
            volume_db,
            fade_out_ms: None,
        }
    }

    /// Creates a noise segment without fade.
    pub fn noise(duration_ms: u32, volume_db: f64) -> Self {
        Segment::Noise {
            duration_ms,
            volume_db,
            fade_out_ms: None,
        }
    }

    /// Creates a silence segment.
    pub fn silence(duration_ms: u32) -> Self {
        Segment::Silence { duration_ms }
    }

    /// Adds a trailing fade-out. Silence ignores it.
    pub fn with_fade_out(mut self, fade_ms: u32) -> Self {
        match &mut self {
            Segment::Tone { fade_out_ms, .. } | Segment::Noise { fade_out_ms, .. } => {
                *fade_out_ms = Some(fade_ms);
            }
            Segment::Silence { .. } => {}
        }
        self
    }

    /// Returns the segment duration in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        match self {
            Segment::Tone { duration_ms, .. }
            | Segment::Noise { duration_ms, .. }
            | Segment::Silence { duration_ms } => *duration_ms,
        }
    }

    /// Returns the fade-out length, if any.
    pub fn fade_out_ms(&self) -> Option<u32> {
        match self {
            Segment::Tone { fade_out_ms, .. } | Segment::Noise { fade_out_ms, .. } => *fade_out_ms,
            Segment::Silence { .. } => None,
        }
    }

    /// Returns the segment type name as it appears in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Tone { .. } => "tone",
            Segment::Noise { .. } => "noise",
            Segment::Silence { .. } => "silence",
        }
    }
}
