//! diwire - compile-time dependency wiring for Rust services
//!
//! diwire reads annotated service files, links them into a name-keyed
//! dependency graph, rejects cyclic graphs and writes a context module with one
//! lazily built singleton accessor per service.
//!
//! # Core Concepts
//!
//! - **Service unit**: a `.rs` file in a service directory. The file stem,
//!   converted to UpperCamelCase, is the service name.
//! - **Descriptor**: a service's name, source path, construction style and
//!   ordered dependency tokens, read from `@param` docs above `fn new` or from
//!   an `INJECT` list next to `fn init`.
//! - **Alias**: a derived service that reuses a base service's type with its
//!   own arguments, e.g. `scalarService = "YourFunkyDependency2('ns')"`.
//! - **Context**: the generated module; every service gets a cached accessor
//!   and dependencies are passed as accessor calls or literals.
//!
//! # Example Usage
//!
//! ```no_run
//! use diwire::{ContextBuilder, RealFileSystem, WireConfig};
//!
//! let config = WireConfig::new(["services"]);
//! let path = ContextBuilder::new(config, RealFileSystem::new()).build()?;
//! println!("wrote {}", path.display());
//! # Ok::<(), diwire::WireError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`descriptor`]: service units, descriptors and extraction strategies
//! - [`graph`]: graph construction, alias expansion and cycle detection
//! - [`context`]: rendering of the context module
//! - [`pipeline`]: the end-to-end build

pub mod cli;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod graph;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use config::{ConfigError, WireConfig};
pub use context::ContextEmitter;
pub use descriptor::{ConstructionStyle, ServiceDescriptor, ServiceParser, ServiceUnit};
pub use error::{Result, WireError};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use graph::{AliasDirective, Cycle, CycleFinder, GraphBuilder, ServiceGraph};
pub use pipeline::ContextBuilder;
pub use progress::{LoggingHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use util::{init_default, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
