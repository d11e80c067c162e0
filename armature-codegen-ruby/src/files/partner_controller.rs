use armature_codegen::{GenerationError, controller_name_for};
use armature_definition::Endpoint;

/// Developer-owned implementation class. The generated route instantiates
/// it, so it is a class rather than a mixin module.
pub struct PartnerController {
    controller: String,
}

impl PartnerController {
    pub fn new(endpoint: &Endpoint) -> Result<Self, GenerationError> {
        let controller = controller_name_for(endpoint)?;
        Ok(Self { controller })
    }

    pub fn render(&self) -> String {
        format!(
            r#"require 'json'

class {controller}Implementation
  def handle_request(params)
    # TODO: Implement business logic here
    {{ message: 'Replace this with actual logic' }}.to_json
  end
end
"#,
            controller = self.controller,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_contains_placeholder_and_todo() {
        let endpoint = Endpoint::new("/users/{id}", "GET");
        let content = PartnerController::new(&endpoint).unwrap().render();
        assert!(content.contains("class UsersIdControllerImplementation"));
        assert!(content.contains("def handle_request(params)"));
        assert!(content.contains("# TODO: Implement business logic here"));
        assert!(content.contains("{ message: 'Replace this with actual logic' }.to_json"));
    }
}
