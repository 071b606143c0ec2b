//! JSON command/event contract between a presentation layer and a [`sapper_core::Session`].

pub use error::*;
pub use host::*;
pub use message::*;

mod error;
mod host;
mod message;
