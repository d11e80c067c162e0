use armature_codegen::{EndpointEmitter, GenerationError, ScaffoldLayout};
use armature_definition::Endpoint;

use crate::files::{GeneratedController, PartnerController};

/// JavaScript emitter producing Express router modules.
pub struct Emitter;

impl EndpointEmitter for Emitter {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn layout(&self) -> ScaffoldLayout {
        ScaffoldLayout {
            generated_dir: "src/generated",
            partner_dir: "src/controllers",
        }
    }

    fn render_generated(&self, endpoint: &Endpoint) -> Result<String, GenerationError> {
        Ok(GeneratedController::new(endpoint)?.render())
    }

    fn render_partner(&self, endpoint: &Endpoint) -> Result<String, GenerationError> {
        Ok(PartnerController::new(endpoint)?.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_share_controller_name() {
        let emitter = Emitter;
        assert_eq!(
            emitter.generated_file_name("UsersIdController"),
            "UsersIdController.js"
        );
        assert_eq!(
            emitter.partner_file_name("UsersIdController"),
            "UsersIdController.js"
        );
    }

    #[test]
    fn test_layout() {
        let layout = Emitter.layout();
        assert_eq!(layout.generated_dir, "src/generated");
        assert_eq!(layout.partner_dir, "src/controllers");
    }

    #[test]
    fn test_empty_path_is_generation_error() {
        let endpoint = Endpoint::new("", "POST");
        assert!(Emitter.render_partner(&endpoint).is_err());
    }
}
