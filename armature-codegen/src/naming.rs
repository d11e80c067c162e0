//! Identifier derivation from URL paths and HTTP verbs.
//!
//! Both functions are pure: identical input always yields identical output,
//! independent of generation order or filesystem state.

use armature_core::capitalize;
use armature_definition::Endpoint;

use crate::GenerationError;

/// Derive a controller type name from a URL path template.
///
/// Strips the surrounding `/` and the `{}` placeholder markers, capitalizes
/// each segment, concatenates them, and appends `Controller`:
/// `/users/{id}` -> `UsersIdController`.
///
/// Because placeholder markers are stripped, `/users/{id}` and `/users/id`
/// derive the same name. This collision is an accepted limitation;
/// disambiguating would change every generated identifier.
///
/// Returns `None` when no identifier can be derived (empty path, `/`, or a
/// path with only separators and placeholder markers).
pub fn controller_name(path: &str) -> Option<String> {
    let mut name = String::new();
    for segment in path.trim_matches('/').split('/') {
        let segment: String = segment.chars().filter(|c| *c != '{' && *c != '}').collect();
        name.push_str(&capitalize(&segment));
    }

    if name.is_empty() {
        None
    } else {
        name.push_str("Controller");
        Some(name)
    }
}

/// Derive a controller name for an endpoint, or fail with the endpoint's
/// coordinates attached.
pub fn controller_name_for(endpoint: &Endpoint) -> Result<String, GenerationError> {
    controller_name(&endpoint.path).ok_or_else(|| GenerationError::UnderivableName {
        path: endpoint.path.clone(),
        method: endpoint.method.clone(),
    })
}

/// Derive a handler method name from an HTTP verb, case-insensitively.
///
/// Any verb outside GET/POST/PUT/DELETE (including an empty or malformed
/// one) maps to the generic fallback rather than failing.
pub fn method_name(verb: &str) -> &'static str {
    if verb.eq_ignore_ascii_case("GET") {
        "Get"
    } else if verb.eq_ignore_ascii_case("POST") {
        "Create"
    } else if verb.eq_ignore_ascii_case("PUT") {
        "Update"
    } else if verb.eq_ignore_ascii_case("DELETE") {
        "Delete"
    } else {
        "HandleRequest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_name_strips_placeholders() {
        assert_eq!(
            controller_name("/users/{id}").as_deref(),
            Some("UsersIdController")
        );
        assert_eq!(controller_name("/orders").as_deref(), Some("OrdersController"));
        assert_eq!(
            controller_name("/users/{id}/orders").as_deref(),
            Some("UsersIdOrdersController")
        );
    }

    #[test]
    fn test_controller_name_collision_is_accepted() {
        assert_eq!(controller_name("/users/{id}"), controller_name("/users/id"));
    }

    #[test]
    fn test_controller_name_is_deterministic() {
        assert_eq!(controller_name("/users/{id}"), controller_name("/users/{id}"));
    }

    #[test]
    fn test_controller_name_handles_separator_noise() {
        assert_eq!(controller_name("users"), Some("UsersController".to_string()));
        assert_eq!(
            controller_name("/users//profile/"),
            Some("UsersProfileController".to_string())
        );
    }

    #[test]
    fn test_controller_name_underivable() {
        assert_eq!(controller_name(""), None);
        assert_eq!(controller_name("/"), None);
        assert_eq!(controller_name("///"), None);
        assert_eq!(controller_name("/{}/"), None);
    }

    #[test]
    fn test_method_name_known_verbs() {
        assert_eq!(method_name("GET"), "Get");
        assert_eq!(method_name("get"), "Get");
        assert_eq!(method_name("Post"), "Create");
        assert_eq!(method_name("PUT"), "Update");
        assert_eq!(method_name("delete"), "Delete");
    }

    #[test]
    fn test_method_name_fallback() {
        assert_eq!(method_name("PATCH"), "HandleRequest");
        assert_eq!(method_name("OPTIONS"), "HandleRequest");
        assert_eq!(method_name(""), "HandleRequest");
        assert_eq!(method_name("not a verb"), "HandleRequest");
    }
}
