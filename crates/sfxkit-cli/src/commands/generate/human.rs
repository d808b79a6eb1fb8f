//! Human-readable (colored) output for the generate command.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxkit_audio::WavEncoder;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::render_to_file;
use crate::input::{load_recipes, InputError};

/// Run generate with human-readable (colored) output
pub(super) fn run_human(
    out_dir: &str,
    only: &[String],
    seed: u32,
    sample_rate: Option<u32>,
    recipes_path: Option<&str>,
) -> Result<ExitCode> {
    let start = Instant::now();

    let loaded = match load_recipes(recipes_path.map(Path::new), sample_rate, only) {
        Ok(loaded) => loaded,
        Err(InputError::Invalid { errors }) => {
            println!("{}", "Errors:".red().bold());
            for error in &errors {
                println!("  {} {}", "x".red(), error);
            }
            println!(
                "\n{} Recipe validation failed with {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(1));
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "failed to load recipes from {}",
                    recipes_path.unwrap_or("built-in presets")
                )
            })
        }
    };

    println!("{} {}", "Generating from:".cyan().bold(), loaded.source);
    if let Some(ref hash) = loaded.source_hash {
        println!("{} {}", "Source hash:".dimmed(), hash);
    }
    println!("{} {}", "Seed:".dimmed(), seed);
    println!("{} {}", "Output directory:".dimmed(), out_dir);

    if !loaded.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &loaded.warnings {
            println!(
                "  {} [{}]: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                warning.message
            );
        }
    }

    println!();
    let encoder = WavEncoder;
    for recipe in &loaded.recipes {
        match render_to_file(recipe, seed, &encoder, Path::new(out_dir)) {
            Ok(file) => {
                println!(
                    "  {} {} {}",
                    "✓".green(),
                    recipe.name,
                    format!(
                        "-> {} ({} ms, {} bytes)",
                        file.path.display(),
                        file.duration_ms,
                        file.size_bytes
                    )
                    .dimmed()
                );
            }
            Err(e) => {
                println!(
                    "\n{} {}: [{}] {}",
                    "GENERATION FAILED".red().bold(),
                    recipe.name,
                    e.code(),
                    e
                );
                return Ok(ExitCode::from(2));
            }
        }
    }

    println!(
        "\n{} Generated {} file(s) in {}ms",
        "SUCCESS".green().bold(),
        loaded.recipes.len(),
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}
