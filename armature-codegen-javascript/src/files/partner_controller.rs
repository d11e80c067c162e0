use armature_codegen::{GenerationError, controller_name_for};
use armature_definition::Endpoint;

/// Developer-owned implementation class, written once and preserved across
/// regenerations.
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
            r#"export class {controller}Implementation {{
    async handleRequest(params) {{
        // TODO: Implement business logic here
        return {{ message: 'Replace this with actual logic' }};
    }}
}}
"#,
            controller = self.controller,
        )
    }
}
