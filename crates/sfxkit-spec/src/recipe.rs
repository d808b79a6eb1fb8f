//! Recipe and recipe-file types with validation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::segment::{default_sample_rate, Segment};

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// File stems become file names, so only a conservative character set is allowed.
const FILE_STEM_PATTERN: &str = r"^[a-z0-9][a-z0-9_-]{0,63}$";

static FILE_STEM_REGEX: OnceLock<Regex> = OnceLock::new();

fn file_stem_regex() -> &'static Regex {
    FILE_STEM_REGEX.get_or_init(|| Regex::new(FILE_STEM_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `stem` is safe to use as an output file name.
pub fn is_valid_file_stem(stem: &str) -> bool {
    file_stem_regex().is_match(stem)
}

/// A named sound effect: an ordered list of segments rendered back to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Human-readable effect name (also used by `--only`).
    pub name: String,
    /// Output file name without extension.
    pub file_stem: String,
    /// Sample rate in Hz for every segment.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Segments in playback order.
    pub segments: Vec<Segment>,
}

impl Recipe {
    /// Creates a recipe at the default sample rate.
    pub fn new(name: impl Into<String>, file_stem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_stem: file_stem.into(),
            sample_rate: default_sample_rate(),
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Total duration of all segments in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.segments.iter().map(|s| s.duration_ms() as u64).sum()
    }

    /// Validates this recipe. `path` prefixes JSON paths in reported problems.
    pub fn validate_at(&self, path: &str) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.name.trim().is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyName,
                "recipe name must not be empty",
                format!("{path}.name"),
            ));
        }

        if !is_valid_file_stem(&self.file_stem) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFileStem,
                format!(
                    "file_stem '{}' must match {}",
                    self.file_stem, FILE_STEM_PATTERN
                ),
                format!("{path}.file_stem"),
            ));
        }

        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            result.add_error(ValidationError::with_path(
                ErrorCode::SampleRateOutOfRange,
                format!(
                    "sample_rate must be between {} and {}, got {}",
                    MIN_SAMPLE_RATE, MAX_SAMPLE_RATE, self.sample_rate
                ),
                format!("{path}.sample_rate"),
            ));
        }

        if self.segments.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoSegments,
                "recipe must contain at least one segment",
                format!("{path}.segments"),
            ));
        }

        for (i, segment) in self.segments.iter().enumerate() {
            validate_segment(segment, &format!("{path}.segments[{i}]"), &mut result);
        }

        result
    }

    /// Validates this recipe with JSON paths relative to the recipe itself.
    pub fn validate(&self) -> ValidationResult {
        self.validate_at("recipe")
    }
}

fn validate_segment(segment: &Segment, path: &str, result: &mut ValidationResult) {
    let volume_db = match *segment {
        Segment::Tone {
            frequency,
            volume_db,
            ..
        } => {
            if !frequency.is_finite() || frequency <= 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFrequency,
                    format!("frequency must be a positive number, got {}", frequency),
                    format!("{path}.frequency"),
                ));
            }
            Some(volume_db)
        }
        Segment::Noise { volume_db, .. } => Some(volume_db),
        Segment::Silence { .. } => None,
    };

    if let Some(volume_db) = volume_db {
        if !volume_db.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidVolume,
                format!("volume_db must be finite, got {}", volume_db),
                format!("{path}.volume_db"),
            ));
        } else if volume_db > 0.0 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::VolumeClips,
                format!("volume_db {} exceeds 0 dB; peaks will be clipped", volume_db),
                format!("{path}.volume_db"),
            ));
        }
    }

    if let Some(fade) = segment.fade_out_ms() {
        if fade > segment.duration_ms() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::FadeExceedsSegment,
                format!(
                    "fade_out_ms {} exceeds segment duration {}; the whole segment fades",
                    fade,
                    segment.duration_ms()
                ),
                format!("{path}.fade_out_ms"),
            ));
        }
    }
}

/// A JSON document holding several recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeFile {
    /// Recipes in generation order.
    pub recipes: Vec<Recipe>,
}

impl RecipeFile {
    /// Parses a recipe file from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a recipe file from disk without validating it.
    pub fn from_path(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the file as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every recipe and checks that file stems are unique.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.recipes.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoRecipes,
                "recipe file must declare at least one recipe",
                "recipes",
            ));
        }

        let mut seen = HashSet::new();
        for (i, recipe) in self.recipes.iter().enumerate() {
            let path = format!("recipes[{i}]");
            result.merge(recipe.validate_at(&path));

            if !seen.insert(recipe.file_stem.as_str()) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::DuplicateFileStem,
                    format!("duplicate file_stem '{}'", recipe.file_stem),
                    format!("{path}.file_stem"),
                ));
            }
        }

        result
    }
}
