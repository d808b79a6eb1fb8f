//! sfxkit CLI - Command-line interface for sound-effect generation
//!
//! This binary renders the built-in sound effects (or recipes from a JSON
//! file) to WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sfxkit_cli::commands;

/// sfxkit - Procedural sound-effect generator
#[derive(Parser)]
#[command(name = "sfxkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render sound effects and write them as WAV files
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long, default_value = "se")]
        out_dir: String,

        /// Only generate the named recipe (repeatable)
        #[arg(long)]
        only: Vec<String>,

        /// Seed for noise segments (random if omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Sample rate in Hz (built-in presets default to 44100)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// JSON recipe file to render instead of the built-in presets
        #[arg(short, long)]
        recipes: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in presets
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            only,
            seed,
            sample_rate,
            recipes,
            json,
        } => commands::generate::run(
            &out_dir,
            &only,
            seed,
            sample_rate,
            recipes.as_deref(),
            json,
        ),
        Commands::List { json } => commands::list::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
