//! Core utilities and types for the Armature scaffolding generator.
//!
//! This crate provides the overwrite-vs-preserve file-write policy and the
//! string utilities shared by every target-language emitter.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult, write_file};
// String utilities
pub use utils::{capitalize, escape_double_quoted};
