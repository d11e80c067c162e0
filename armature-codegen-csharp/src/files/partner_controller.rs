use armature_codegen::{GenerationError, controller_name_for, method_name};
use armature_definition::Endpoint;

/// The developer-owned half of the partial controller. Written once, never
/// overwritten by later runs.
pub struct PartnerController<'a> {
    endpoint: &'a Endpoint,
    controller: String,
}

impl<'a> PartnerController<'a> {
    pub fn new(endpoint: &'a Endpoint) -> Result<Self, GenerationError> {
        let controller = controller_name_for(endpoint)?;
        Ok(Self {
            endpoint,
            controller,
        })
    }

    pub fn render(&self) -> String {
        let method = method_name(&self.endpoint.method);
        format!(
            r#"using Microsoft.AspNetCore.Mvc;

namespace Controllers
{{
    public partial class {controller}
    {{
        partial IActionResult {method}Implementation()
        {{
            // TODO: Implement business logic here
            return Ok(new {{ message = "Replace this with actual logic" }});
        }}
    }}
}}
"#,
            controller = self.controller,
            method = method,
        )
    }
}
