//! Snapshot tests for JavaScript scaffolding generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional
//! template changes.

use armature_codegen::EndpointEmitter;
use armature_codegen_javascript::Emitter;
use armature_definition::{AuthDefinition, Endpoint};

fn users_endpoint() -> Endpoint {
    Endpoint::new("/users/{id}", "GET").with_auth(AuthDefinition {
        enforce: true,
        roles: vec!["admin".to_string(), "support".to_string()],
    })
}

#[test]
fn test_generated_controller() {
    let content = Emitter.render_generated(&users_endpoint()).unwrap();
    insta::assert_snapshot!("generated_controller", content);
}

#[test]
fn test_partner_controller() {
    let content = Emitter.render_partner(&users_endpoint()).unwrap();
    insta::assert_snapshot!("partner_controller", content);
}
