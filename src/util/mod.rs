//! Utility modules for diwire

pub mod logging;

pub use logging::{init_default, init_logging, LoggingConfig};
