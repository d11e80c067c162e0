use armature_codegen::{AuthPolicy, GenerationError, controller_name_for, quoted_role_list};
use armature_definition::Endpoint;

/// Sinatra route class: authentication filters, route binding, delegation
/// into the partner implementation class.
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

    fn auth_filters(&self) -> String {
        let mut filters = String::from("before do authenticate_request end");
        if let Some(roles) =
            AuthPolicy::from_definition(self.endpoint.auth.as_ref()).roles()
        {
            filters.push_str(&format!(
                "\n  before do authorize_roles([{}]) end",
                quoted_role_list(roles)
            ));
        }
        filters
    }

    /// Sinatra parameter convention: `{id}` becomes `:id`.
    fn route(&self) -> String {
        self.endpoint.path.replace('{', ":").replace('}', "")
    }

    pub fn render(&self) -> String {
        format!(
            r#"require 'sinatra/base'
require_relative '../controllers/{controller}'

class {controller} < Sinatra::Base
  {auth_filters}

  {verb} '{route}' do
    {controller}Implementation.new.handle_request(params)
  end
end
"#,
            controller = self.controller,
            auth_filters = self.auth_filters(),
            verb = self.endpoint.method.to_ascii_lowercase(),
            route = self.route(),
        )
    }
}

#[cfg(test)]
mod tests {
    use armature_definition::AuthDefinition;

    use super::*;

    #[test]
    fn test_route_uses_sinatra_params_and_verb() {
        let endpoint = Endpoint::new("/users/{id}", "GET");
        let content = GeneratedController::new(&endpoint).unwrap().render();
        assert!(content.contains("get '/users/:id' do"));
        assert!(content.contains("class UsersIdController < Sinatra::Base"));
        assert!(content.contains("UsersIdControllerImplementation.new.handle_request(params)"));
    }

    #[test]
    fn test_authentication_filter_always_present() {
        let endpoint = Endpoint::new("/orders", "POST");
        let content = GeneratedController::new(&endpoint).unwrap().render();
        assert!(content.contains("before do authenticate_request end"));
        assert!(!content.contains("authorize_roles"));
    }

    #[test]
    fn test_role_filter_preserves_order() {
        let endpoint = Endpoint::new("/users/{id}", "GET").with_auth(AuthDefinition {
            enforce: true,
            roles: vec!["admin".to_string(), "support".to_string()],
        });
        let content = GeneratedController::new(&endpoint).unwrap().render();
        assert!(content.contains(r#"before do authorize_roles(["admin", "support"]) end"#));
    }

    #[test]
    fn test_unrecognized_verb_is_lowercased_verbatim() {
        let endpoint = Endpoint::new("/orders", "PATCH");
        let content = GeneratedController::new(&endpoint).unwrap().render();
        assert!(content.contains("patch '/orders' do"));
    }
}
