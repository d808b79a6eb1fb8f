//! Generate command implementation
//!
//! Renders the built-in presets (or a recipe file) and writes one audio
//! file per recipe into the output directory.

mod human;
mod json;

#[cfg(test)]
mod tests;

use anyhow::Result;
use sfxkit_audio::{export, render_recipe, AudioResult, Encoder, ExportedFile};
use sfxkit_spec::Recipe;
use std::path::Path;
use std::process::ExitCode;

/// Run the generate command
///
/// # Arguments
/// * `out_dir` - Output directory, created if missing
/// * `only` - Recipe names or file stems to generate (empty: all)
/// * `seed` - Seed for noise segments; a random seed is drawn when `None`
/// * `sample_rate` - Sample rate override (built-in presets default to 44100)
/// * `recipes_path` - JSON recipe file used instead of the built-in presets
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 invalid input, 2 generation error
pub fn run(
    out_dir: &str,
    only: &[String],
    seed: Option<u32>,
    sample_rate: Option<u32>,
    recipes_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let seed = seed.unwrap_or_else(sfxkit_audio::rng::random_seed);

    if json_output {
        json::run_json(out_dir, only, seed, sample_rate, recipes_path)
    } else {
        human::run_human(out_dir, only, seed, sample_rate, recipes_path)
    }
}

/// Renders one recipe and writes it as `<out_dir>/<file_stem>.<ext>`.
fn render_to_file(
    recipe: &Recipe,
    seed: u32,
    encoder: &dyn Encoder,
    out_dir: &Path,
) -> AudioResult<ExportedFile> {
    let buffer = render_recipe(recipe, seed)?;
    export(&buffer, encoder, out_dir, &recipe.file_stem)
}
