use armature_codegen::{AuthPolicy, GenerationError, controller_name_for, method_name};
use armature_core::{capitalize, escape_double_quoted};
use armature_definition::Endpoint;

/// The generated half of a partial controller: route binding, authorization
/// attributes, and delegation into the partner half. Never business logic.
pub struct GeneratedController<'a> {
    endpoint: &'a Endpoint,
    controller: String,
}

impl<'a> GeneratedController<'a> {
    pub fn new(endpoint: &'a Endpoint) -> Result<Self, GenerationError> {
        let controller = controller_name_for(endpoint)?;
        Ok(Self {
            endpoint,
            controller,
        })
    }

    fn auth_attribute(&self) -> String {
        match AuthPolicy::from_definition(self.endpoint.auth.as_ref()).roles() {
            // ASP.NET Core takes the role list as one comma-separated string
            Some(roles) => format!(
                "[Authorize(Roles = \"{}\")]",
                roles
                    .iter()
                    .map(|role| escape_double_quoted(role))
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            None => "[Authorize]".to_string(),
        }
    }

    fn http_attribute(&self) -> String {
        format!(
            "Http{}",
            capitalize(&self.endpoint.method.to_ascii_lowercase())
        )
    }

    pub fn render(&self) -> String {
        let method = method_name(&self.endpoint.method);
        format!(
            r#"using Microsoft.AspNetCore.Mvc;
using Microsoft.AspNetCore.Authorization;

namespace GeneratedControllers
{{
    {auth_attribute}
    [ApiController]
    [Route("{path}")]
    public partial class {controller} : ControllerBase
    {{
        [{http_attribute}("{path}")]
        public IActionResult {method}()
        {{
            return {method}Implementation();
        }}

        partial IActionResult {method}Implementation();
    }}
}}
"#,
            auth_attribute = self.auth_attribute(),
            http_attribute = self.http_attribute(),
            path = self.endpoint.path,
            controller = self.controller,
            method = method,
        )
    }
}
