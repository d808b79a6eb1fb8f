//! List command implementation
//!
//! Prints the built-in presets with their durations.

use anyhow::Result;
use colored::Colorize;
use sfxkit_spec::Preset;
use std::process::ExitCode;

use super::json_output::{ListOutput, PresetInfo};

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    let presets: Vec<PresetInfo> = Preset::ALL.into_iter().map(PresetInfo::from).collect();

    if json_output {
        let output = ListOutput { presets };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Built-in presets:".cyan().bold());
    let width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for preset in &presets {
        println!(
            "  {}  {:>4} ms  {}",
            format!("{:<width$}", preset.name).green(),
            preset.duration_ms,
            preset.description.dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
