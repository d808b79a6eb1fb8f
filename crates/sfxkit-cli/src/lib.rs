//! sfxkit CLI library.
//!
//! This crate provides the core functionality for the `sfxkit` binary:
//! loading recipes and rendering them to files.

pub mod commands;
pub mod input;
