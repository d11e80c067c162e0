//! Emitter contract implemented once per target language.

use armature_core::Overwrite;
use armature_definition::Endpoint;
use thiserror::Error;

use crate::naming::controller_name_for;

/// A single endpoint could not be rendered.
///
/// Generation skips the endpoint and reports it; it never aborts the run.
/// Unrecognized verbs and absent auth blocks are not errors, they fall back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("cannot derive a controller name from path '{path}' ({method} endpoint)")]
    UnderivableName { path: String, method: String },
}

/// Output directories for one target language, relative to the output root.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldLayout {
    /// Directory for generated artifacts (always overwritten)
    pub generated_dir: &'static str,
    /// Directory for partner artifacts (developer-owned, created once)
    pub partner_dir: &'static str,
}

/// One file produced by an emitter, relative to the output root.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
    pub overwrite: Overwrite,
}

/// The two artifacts emitted for a single endpoint.
#[derive(Debug, Clone)]
pub struct EndpointFiles {
    /// Generator-owned artifact, overwritten every run
    pub generated: ScaffoldFile,
    /// Developer-owned artifact, written only if absent
    pub partner: ScaffoldFile,
}

/// Trait for target-language emitters.
///
/// Implement this trait to add scaffolding support for a new language. Name
/// derivation and auth encoding are shared; an implementation only owns its
/// rendering templates, directory layout, and file naming.
pub trait EndpointEmitter {
    /// Language identifier (e.g., "csharp", "ruby", "javascript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files, without the dot
    fn file_extension(&self) -> &'static str;

    /// Output directory layout for this language
    fn layout(&self) -> ScaffoldLayout;

    /// File name of the generated artifact for a controller
    fn generated_file_name(&self, controller: &str) -> String {
        format!("{}.{}", controller, self.file_extension())
    }

    /// File name of the partner artifact for a controller
    fn partner_file_name(&self, controller: &str) -> String {
        format!("{}.{}", controller, self.file_extension())
    }

    /// Render the generated artifact for an endpoint
    fn render_generated(&self, endpoint: &Endpoint) -> Result<String, GenerationError>;

    /// Render the partner artifact for an endpoint.
    ///
    /// The emitter must not assume the identifier is fresh; whether the
    /// rendered content is actually written is decided by the scaffold
    /// writer, not here.
    fn render_partner(&self, endpoint: &Endpoint) -> Result<String, GenerationError>;

    /// Produce both artifacts for an endpoint with their write policies.
    fn scaffold(&self, endpoint: &Endpoint) -> Result<EndpointFiles, GenerationError> {
        let controller = controller_name_for(endpoint)?;
        let layout = self.layout();

        Ok(EndpointFiles {
            generated: ScaffoldFile {
                path: format!(
                    "{}/{}",
                    layout.generated_dir,
                    self.generated_file_name(&controller)
                ),
                content: self.render_generated(endpoint)?,
                overwrite: Overwrite::Always,
            },
            partner: ScaffoldFile {
                path: format!(
                    "{}/{}",
                    layout.partner_dir,
                    self.partner_file_name(&controller)
                ),
                content: self.render_partner(endpoint)?,
                overwrite: Overwrite::IfMissing,
            },
        })
    }
}
