//! Machine-readable JSON output for the generate command.

use anyhow::Result;
use sfxkit_audio::{Encoder, WavEncoder};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::render_to_file;
use crate::commands::json_output::{
    error_codes, input_error_to_json, validation_warning_to_json, GenerateOutput, GenerateResult,
    GeneratedFile, JsonError,
};
use crate::input::{load_recipes, RecipeSource};

/// Run generate with machine-readable JSON output
pub(super) fn run_json(
    out_dir: &str,
    only: &[String],
    seed: u32,
    sample_rate: Option<u32>,
    recipes_path: Option<&str>,
) -> Result<ExitCode> {
    let start = Instant::now();

    let loaded = match load_recipes(recipes_path.map(Path::new), sample_rate, only) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output =
                GenerateOutput::failure(input_error_to_json(&e, recipes_path), vec![], None);
            print_output(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let warnings = loaded
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let encoder = WavEncoder;
    let mut outputs = Vec::with_capacity(loaded.recipes.len());
    let mut failure = None;
    for recipe in &loaded.recipes {
        match render_to_file(recipe, seed, &encoder, Path::new(out_dir)) {
            Ok(file) => outputs.push(GeneratedFile::from_export(
                &recipe.name,
                encoder.extension(),
                &file,
            )),
            Err(e) => {
                failure = Some(JsonError::new(
                    error_codes::GENERATION_ERROR,
                    format!("{}: [{}] {}", recipe.name, e.code(), e),
                ));
                break;
            }
        }
    }

    let result = GenerateResult {
        source: match loaded.source {
            RecipeSource::Builtin => "builtin".to_string(),
            RecipeSource::File(ref path) => path.display().to_string(),
        },
        source_hash: loaded.source_hash,
        seed,
        out_dir: out_dir.to_string(),
        outputs,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    match failure {
        None => {
            print_output(&GenerateOutput::success(result, warnings))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(error) => {
            print_output(&GenerateOutput::failure(vec![error], warnings, Some(result)))?;
            Ok(ExitCode::from(2))
        }
    }
}

fn print_output(output: &GenerateOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
