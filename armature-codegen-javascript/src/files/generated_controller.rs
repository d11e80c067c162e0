use armature_codegen::{AuthPolicy, GenerationError, controller_name_for, quoted_role_list};
use armature_definition::Endpoint;

/// Express router module: authentication middleware chain, route binding,
/// delegation into the partner implementation class.
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

    fn middleware_chain(&self) -> String {
        match AuthPolicy::from_definition(self.endpoint.auth.as_ref()).roles() {
            Some(roles) => format!(
                "authenticateMiddleware, authorizeRoles([{}])",
                quoted_role_list(roles)
            ),
            None => "authenticateMiddleware".to_string(),
        }
    }

    /// Express parameter convention: `{id}` becomes `:id`.
    fn route(&self) -> String {
        self.endpoint.path.replace('{', ":").replace('}', "")
    }

    pub fn render(&self) -> String {
        format!(
            r#"import express from 'express';
import {{ {controller}Implementation }} from '../controllers/{controller}.js';
import {{ authenticateMiddleware, authorizeRoles }} from '../middleware/auth.js';

const router = express.Router();

router.{verb}('{route}', {middleware}, async (req, res) => {{
    const result = await new {controller}Implementation().handleRequest(req.params);
    res.json(result);
}});

export default router;
"#,
            controller = self.controller,
            verb = self.endpoint.method.to_ascii_lowercase(),
            route = self.route(),
            middleware = self.middleware_chain(),
        )
    }
}
