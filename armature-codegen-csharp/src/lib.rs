//! C# (ASP.NET Core) emitter.
//!
//! Renders partial controller classes: the generated half binds the route
//! and the authorization attributes, the partner half is the developer-owned
//! implementation. The partial-class split is what lets regeneration leave
//! business logic alone.

mod emitter;
mod files;

pub use emitter::Emitter;
pub use files::{GeneratedController, PartnerController};
