//! Error types for the audio backend.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during rendering and export.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Buffers passed to `concatenate` disagree on sample rate.
    #[error("cannot concatenate buffers with different sample rates: {expected} Hz and {found} Hz")]
    SampleRateMismatch {
        /// Sample rate of the first buffer.
        expected: u32,
        /// Sample rate of the offending buffer.
        found: u32,
    },

    /// `concatenate` was called with no buffers.
    #[error("cannot concatenate an empty list of buffers")]
    EmptyConcatenation,

    /// Recipe failed validation before rendering.
    #[error("invalid recipe '{name}': {message}")]
    InvalidRecipe {
        /// Recipe name.
        name: String,
        /// First validation error.
        message: String,
    },

    /// Encoded output would not fit the container.
    #[error("encoding error: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::SampleRateMismatch { .. } => "AUDIO_001",
            AudioError::EmptyConcatenation => "AUDIO_002",
            AudioError::InvalidRecipe { .. } => "AUDIO_003",
            AudioError::Encoding { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
        }
    }
}
