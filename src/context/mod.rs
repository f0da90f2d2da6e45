//! Rendering of the generated context module
//!
//! The generated module declares each service's source file with a
//! `#[path = "..."]` attribute relative to the output directory, and exposes a
//! `Context` struct holding one `OnceCell` slot per service. Each accessor
//! constructs its value on first access, passing literal arguments through and
//! resolving every other argument through the matching accessor, so a service
//! shared by several dependents is built once.

mod arguments;
mod emitter;
pub mod paths;

pub use arguments::{is_numeric_literal, Argument};
pub use emitter::ContextEmitter;
