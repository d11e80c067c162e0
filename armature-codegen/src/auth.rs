//! Authorization-policy encoding shared by all emitters.

use armature_core::escape_double_quoted;
use armature_definition::AuthDefinition;

/// Language-independent authorization policy for a generated endpoint.
///
/// Every generated endpoint requires authentication; there is no generator
/// path that skips it. The definition's `enforce` flag only gates the role
/// restriction, never authentication itself. That asymmetry is inherited
/// wire behavior and is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Authentication required, no role restriction
    Authenticated,
    /// Authentication required, restricted to the listed roles in order
    /// (duplicates preserved)
    RoleRestricted(Vec<String>),
}

impl AuthPolicy {
    /// Encode an endpoint's auth block into a policy.
    ///
    /// Absent auth, `enforce == false`, and an empty role list all collapse
    /// to the authentication-only baseline.
    pub fn from_definition(auth: Option<&AuthDefinition>) -> Self {
        match auth {
            Some(auth) if auth.enforce && !auth.roles.is_empty() => {
                AuthPolicy::RoleRestricted(auth.roles.clone())
            }
            _ => AuthPolicy::Authenticated,
        }
    }

    /// The ordered role list, if this policy restricts by role.
    pub fn roles(&self) -> Option<&[String]> {
        match self {
            AuthPolicy::Authenticated => None,
            AuthPolicy::RoleRestricted(roles) => Some(roles),
        }
    }
}

/// Render roles as a comma-separated list of double-quoted, escaped
/// literals: `"admin", "support"`.
///
/// All three targets embed roles in double-quoted literals, so the escaping
/// lives here instead of leaking into each emitter.
pub fn quoted_role_list(roles: &[String]) -> String {
    roles
        .iter()
        .map(|role| format!("\"{}\"", escape_double_quoted(role)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(enforce: bool, roles: &[&str]) -> AuthDefinition {
        AuthDefinition {
            enforce,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_absent_auth_is_baseline() {
        assert_eq!(AuthPolicy::from_definition(None), AuthPolicy::Authenticated);
    }

    #[test]
    fn test_enforce_false_is_baseline_even_with_roles() {
        let policy = AuthPolicy::from_definition(Some(&auth(false, &["admin"])));
        assert_eq!(policy, AuthPolicy::Authenticated);
    }

    #[test]
    fn test_enforce_true_without_roles_is_baseline() {
        let policy = AuthPolicy::from_definition(Some(&auth(true, &[])));
        assert_eq!(policy, AuthPolicy::Authenticated);
    }

    #[test]
    fn test_roles_kept_in_order_without_dedup() {
        let policy = AuthPolicy::from_definition(Some(&auth(true, &["support", "admin", "support"])));
        assert_eq!(
            policy.roles().unwrap(),
            &["support".to_string(), "admin".to_string(), "support".to_string()]
        );
    }

    #[test]
    fn test_quoted_role_list_escapes_literal_breakers() {
        let roles = vec!["admin".to_string(), "ro\"le".to_string()];
        assert_eq!(quoted_role_list(&roles), r#""admin", "ro\"le""#);
    }
}
