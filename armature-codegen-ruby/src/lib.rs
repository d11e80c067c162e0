//! Ruby (Sinatra) emitter.
//!
//! The generated half is a Sinatra route class wired with authentication
//! filters; the partner half is a plain implementation class the developer
//! owns.

mod emitter;
mod files;

pub use emitter::Emitter;
pub use files::{GeneratedController, PartnerController};
