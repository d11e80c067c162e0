//! Shared code-generation core for Armature.
//!
//! Identifier derivation and the authorization-policy encoding are shared by
//! every target-language emitter; only the rendering templates differ per
//! target. The scaffold writer enforces the overwrite-vs-preserve file
//! policy for all of them.

mod auth;
mod emitter;
mod naming;
mod scaffold;

pub use auth::{AuthPolicy, quoted_role_list};
pub use emitter::{EndpointEmitter, EndpointFiles, GenerationError, ScaffoldFile, ScaffoldLayout};
pub use naming::{controller_name, controller_name_for, method_name};
pub use scaffold::{EndpointSkip, Scaffold, ScaffoldPlan, ScaffoldReport};
