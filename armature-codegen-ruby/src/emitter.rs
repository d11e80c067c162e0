use armature_codegen::{EndpointEmitter, GenerationError, ScaffoldLayout};
use armature_definition::Endpoint;

use crate::files::{GeneratedController, PartnerController};

/// Ruby emitter producing Sinatra route classes.
pub struct Emitter;

impl EndpointEmitter for Emitter {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn file_extension(&self) -> &'static str {
        "rb"
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
            "UsersIdController.rb"
        );
        assert_eq!(
            emitter.partner_file_name("UsersIdController"),
            "UsersIdController.rb"
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
        let endpoint = Endpoint::new("/", "GET");
        assert!(Emitter.render_generated(&endpoint).is_err());
    }
}
