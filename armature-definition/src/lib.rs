//! API-definition model and parsing for Armature.
//!
//! The definition document is a YAML file describing an API surface (title,
//! version, endpoints). This crate owns deserialization and the diagnostics
//! for missing or malformed documents; generation itself lives in the
//! codegen crates and receives the parsed, immutable model.

mod document;
mod error;
mod language;
mod model;

pub use document::{ApiDocument, parse_str, parse_str_with_filename};
pub use error::{Error, Result};
pub use language::Language;
pub use model::{ApiDefinition, AuthDefinition, Endpoint, ResponseDefinition};
