use armature_codegen::{EndpointEmitter, GenerationError, ScaffoldLayout};
use armature_definition::Endpoint;

use crate::files::{GeneratedController, PartnerController};

/// C# emitter producing ASP.NET Core partial controllers.
pub struct Emitter;

impl EndpointEmitter for Emitter {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn layout(&self) -> ScaffoldLayout {
        ScaffoldLayout {
            generated_dir: "src/GeneratedControllers",
            partner_dir: "src/Controllers",
        }
    }

    // The `.Generated.` infix keeps both halves of the partial class apart
    // when they end up next to each other in an IDE.
    fn generated_file_name(&self, controller: &str) -> String {
        format!("{controller}.Generated.cs")
    }

    fn render_generated(&self, endpoint: &Endpoint) -> Result<String, GenerationError> {
        Ok(GeneratedController::new(endpoint)?.render())
    }

    fn render_partner(&self, endpoint: &Endpoint) -> Result<String, GenerationError> {
        Ok(PartnerController::new(endpoint)?.render())
    }
}
