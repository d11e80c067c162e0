//! JavaScript (Express) emitter.
//!
//! The generated half is an Express router module with the authentication
//! middleware chain; the partner half is the implementation class the
//! developer owns.

mod emitter;
mod files;

pub use emitter::Emitter;
pub use files::{GeneratedController, PartnerController};
