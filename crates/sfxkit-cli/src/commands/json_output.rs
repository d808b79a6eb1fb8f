//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate` and `list`. Each run
//! prints exactly one document to stdout.

use serde::{Deserialize, Serialize};
use sfxkit_audio::ExportedFile;
use sfxkit_spec::{Preset, ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation errors pass through their own `E0xx` codes; export and
/// rendering failures carry the `AUDIO_0xx` code in the message.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// `--only` names no known recipe
    pub const UNKNOWN_RECIPE: &str = "CLI_003";
    /// Rendering or export failed
    pub const GENERATION_ERROR: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E006")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every requested file was written
    pub success: bool,
    /// Errors encountered while loading or generating
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Generation details (present once recipes loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        result: Option<GenerateResult>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result,
        }
    }
}

/// Generation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// "builtin" or the recipe file path
    pub source: String,
    /// BLAKE3 hash of the recipe file (file sources only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Seed used for noise segments
    pub seed: u32,
    /// Output directory
    pub out_dir: String,
    /// Files written, in generation order
    pub outputs: Vec<GeneratedFile>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// A generated output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedFile {
    /// Recipe name
    pub name: String,
    /// Output format (wav)
    pub format: String,
    /// Path of the written file
    pub path: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of samples
    pub num_samples: usize,
    /// Clip duration in milliseconds
    pub duration_ms: f64,
    /// BLAKE3 hash of the PCM samples
    pub pcm_hash: String,
}

impl GeneratedFile {
    /// Builds the JSON record for an exported file.
    pub fn from_export(name: &str, format: &str, file: &ExportedFile) -> Self {
        Self {
            name: name.to_string(),
            format: format.to_string(),
            path: file.path.display().to_string(),
            size_bytes: file.size_bytes,
            sample_rate: file.sample_rate,
            num_samples: file.num_samples,
            duration_ms: file.duration_ms,
            pcm_hash: file.pcm_hash.clone(),
        }
    }
}

/// JSON output for the `list` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    /// Built-in presets in generation order
    pub presets: Vec<PresetInfo>,
}

/// One built-in preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetInfo {
    /// Preset name, also its file stem
    pub name: String,
    /// Short description
    pub description: String,
    /// Number of segments
    pub segments: usize,
    /// Total duration in milliseconds
    pub duration_ms: u64,
}

impl From<Preset> for PresetInfo {
    fn from(preset: Preset) -> Self {
        let recipe = preset.recipe();
        Self {
            name: preset.as_str().to_string(),
            description: preset.description().to_string(),
            segments: recipe.segments.len(),
            duration_ms: recipe.duration_ms(),
        }
    }
}

/// Converts an input error to JSON errors.
///
/// Validation failures expand to one entry per validation error.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> Vec<JsonError> {
    let errors = match err {
        InputError::FileRead { .. } => {
            vec![JsonError::new(error_codes::FILE_READ, err.to_string())]
        }
        InputError::JsonParse { .. } => {
            vec![JsonError::new(error_codes::JSON_PARSE, err.to_string())]
        }
        InputError::UnknownRecipe { .. } => {
            vec![JsonError::new(error_codes::UNKNOWN_RECIPE, err.to_string())]
        }
        InputError::Invalid { errors } => errors.iter().map(validation_error_to_json).collect(),
    };

    match file {
        Some(f) => errors.into_iter().map(|e| e.with_file(f)).collect(),
        None => errors,
    }
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}
