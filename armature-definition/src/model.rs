//! In-memory model of an API surface.
//!
//! The model is constructed once per generation run from the YAML document
//! and is never mutated during generation.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Root of an API definition document.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDefinition {
    /// Human-readable API title
    pub title: String,

    /// API version (accepts both `version: '1.0'` and the bare scalar
    /// `version: 1.0` commonly found in hand-written definitions)
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,

    /// Endpoints in document order; generation preserves this order
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// A single API endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// URL template using `{name}` placeholders for path parameters
    pub path: String,

    /// HTTP verb; matched case-insensitively, unrecognized verbs fall back
    /// to a generic handler identifier rather than failing generation
    pub method: String,

    /// Informational only; not used in generation
    #[serde(default)]
    pub description: String,

    /// Authorization requirement; absent means "authentication only"
    #[serde(default)]
    pub auth: Option<AuthDefinition>,

    /// Response shapes by status code; carried through the model but not
    /// consumed by the generators
    #[serde(default)]
    pub response: IndexMap<u16, ResponseDefinition>,
}

impl Endpoint {
    /// Create an endpoint with the given path and verb and no auth block.
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            description: String::new(),
            auth: None,
            response: IndexMap::new(),
        }
    }

    /// Attach an auth block.
    pub fn with_auth(mut self, auth: AuthDefinition) -> Self {
        self.auth = Some(auth);
        self
    }
}

/// Authorization requirement for an endpoint.
///
/// Authentication is always enforced by the generated code; `enforce` only
/// gates the role restriction. The field name is kept as it appears on the
/// wire.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthDefinition {
    #[serde(default)]
    pub enforce: bool,

    /// Role names in document order; empty means "no role restriction"
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response shape for a single status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseDefinition {
    /// Field name to type-name mapping, in document order
    #[serde(default)]
    pub json: IndexMap<String, String>,
}

/// Accept a string or numeric scalar as a version string.
///
/// Going through `serde_yaml::Number` keeps a float's fractional part, so
/// the bare scalar `1.0` stays `"1.0"` instead of collapsing to `"1"`.
fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        String(String),
        Number(serde_yaml::Number),
    }

    Ok(match Version::deserialize(deserializer)? {
        Version::String(s) => s,
        Version::Number(n) => n.to_string(),
    })
}
