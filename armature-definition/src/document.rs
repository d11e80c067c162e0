use std::path::{Path, PathBuf};

use crate::{ApiDefinition, Error, Result};

/// An API definition document: the raw YAML alongside its parsed model.
///
/// Keeping the raw content around lets parse errors point back into the
/// source with spans.
#[derive(Debug)]
pub struct ApiDocument {
    path: PathBuf,
    content: String,
    definition: ApiDefinition,
}

impl ApiDocument {
    /// Open and parse an API definition file.
    ///
    /// A missing file and a malformed document are both fatal; no generation
    /// runs on a partially-parsed model.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
        let filename = path.display().to_string();
        let definition = parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            definition,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed definition.
    pub fn definition(&self) -> &ApiDefinition {
        &self.definition
    }
}

/// Parse an API definition from a string (uses "api.yaml" as the filename)
pub fn parse_str(content: &str) -> Result<ApiDefinition> {
    parse_str_with_filename(content, "api.yaml")
}

/// Parse an API definition from a string with a filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<ApiDefinition> {
    serde_yaml::from_str(content).map_err(|e| Error::parse(e, content, filename))
}
