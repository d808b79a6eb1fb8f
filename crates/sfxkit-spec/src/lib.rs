//! sfxkit Recipe Library
//!
//! This crate provides the data model for sfxkit sound effects: tone and
//! noise parameters, recipe segments, the built-in preset catalog, and
//! recipe-file validation.
//!
//! # Example
//!
//! ```
//! use sfxkit_spec::{Preset, Recipe, Segment};
//!
//! let recipe = Recipe::new("chirp", "chirp")
//!     .segment(Segment::tone(1200.0, 80, -6.0))
//!     .segment(Segment::silence(40))
//!     .segment(Segment::tone(1600.0, 80, -6.0).with_fade_out(40));
//!
//! assert!(recipe.validate().is_ok());
//! assert_eq!(recipe.duration_ms(), 200);
//! assert_eq!(Preset::Success.recipe().duration_ms(), 500);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`preset`]: The six built-in effects
//! - [`recipe`]: Recipes, recipe files, and validation
//! - [`segment`]: Tone, noise, and silence parameters

pub mod error;
pub mod preset;
pub mod recipe;
pub mod segment;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use preset::Preset;
pub use recipe::{is_valid_file_stem, Recipe, RecipeFile, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};
pub use segment::{NoiseSpec, Segment, ToneSpec, DEFAULT_SAMPLE_RATE};
