//! Recipe loading for the CLI.
//!
//! Recipes come either from the built-in preset catalog or from a JSON
//! recipe file. Both paths apply the optional sample-rate override, filter
//! by `--only`, and validate before anything is rendered.

use sfxkit_spec::{
    Preset, Recipe, RecipeFile, ValidationError, ValidationWarning, DEFAULT_SAMPLE_RATE,
};
use std::path::{Path, PathBuf};

/// Where the recipes of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    /// The six built-in presets.
    Builtin,
    /// A JSON recipe file.
    File(PathBuf),
}

impl std::fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeSource::Builtin => write!(f, "built-in presets"),
            RecipeSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of loading recipes.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Validated recipes in generation order.
    pub recipes: Vec<Recipe>,
    /// Where the recipes came from.
    pub source: RecipeSource,
    /// BLAKE3 hash of the recipe file bytes (file sources only).
    pub source_hash: Option<String>,
    /// Validation warnings for the selected recipes.
    pub warnings: Vec<ValidationWarning>,
}

/// Errors that can occur while loading recipes.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// A name passed to `--only` matches no recipe.
    UnknownRecipe {
        name: String,
        available: Vec<String>,
    },

    /// The selected recipes failed validation.
    Invalid { errors: Vec<ValidationError> },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::UnknownRecipe { name, available } => write!(
                f,
                "unknown recipe '{}' (expected one of: {})",
                name,
                available.join(", ")
            ),
            InputError::Invalid { errors } => {
                write!(f, "recipe validation failed with {} error(s)", errors.len())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads, filters and validates the recipes for a run.
///
/// # Arguments
/// * `recipes_path` - JSON recipe file; `None` selects the built-in presets
/// * `sample_rate` - Rate override for every loaded recipe. Built-in presets
///   default to 44100 Hz; file recipes keep their own rate when `None`
/// * `only` - Recipe names or file stems to keep; empty keeps all
pub fn load_recipes(
    recipes_path: Option<&Path>,
    sample_rate: Option<u32>,
    only: &[String],
) -> Result<LoadResult, InputError> {
    let (file, source, source_hash) = match recipes_path {
        Some(path) => {
            let bytes = std::fs::read(path).map_err(|e| InputError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            let content = String::from_utf8_lossy(&bytes);
            let file = RecipeFile::from_json(&content).map_err(|e| InputError::JsonParse {
                message: e.to_string(),
            })?;
            let hash = blake3::hash(&bytes).to_hex().to_string();
            (file, RecipeSource::File(path.to_path_buf()), Some(hash))
        }
        None => (Preset::catalog(), RecipeSource::Builtin, None),
    };

    let rate = match source {
        RecipeSource::Builtin => Some(sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)),
        RecipeSource::File(_) => sample_rate,
    };

    let mut recipes = select_recipes(file.recipes, only)?;
    if let Some(rate) = rate {
        recipes = recipes
            .into_iter()
            .map(|recipe| recipe.with_sample_rate(rate))
            .collect();
    }

    let selected = RecipeFile { recipes };
    let validation = selected.validate();
    if !validation.is_ok() {
        return Err(InputError::Invalid {
            errors: validation.errors,
        });
    }

    Ok(LoadResult {
        recipes: selected.recipes,
        source,
        source_hash,
        warnings: validation.warnings,
    })
}

/// Keeps the recipes whose name or file stem appears in `only`.
///
/// Order follows the recipe list, not `only`. Every entry of `only` must
/// match at least one recipe.
pub fn select_recipes(recipes: Vec<Recipe>, only: &[String]) -> Result<Vec<Recipe>, InputError> {
    if only.is_empty() {
        return Ok(recipes);
    }

    for name in only {
        if !recipes
            .iter()
            .any(|r| &r.name == name || &r.file_stem == name)
        {
            return Err(InputError::UnknownRecipe {
                name: name.clone(),
                available: recipes.iter().map(|r| r.file_stem.clone()).collect(),
            });
        }
    }

    Ok(recipes
        .into_iter()
        .filter(|r| only.iter().any(|n| n == &r.name || n == &r.file_stem))
        .collect())
}
