//! Error types for building a context

use crate::graph::Cycle;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build before any artifact is written
#[derive(Debug, Error)]
pub enum WireError {
    /// Two descriptors (aliases included) resolve to the same graph key
    #[error("Duplicate service name '{name}' (from {} and {})", .first.display(), .second.display())]
    DuplicateServiceName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// An alias directive names a base service that is not in the graph
    #[error("Alias '{alias}' refers to unknown base service '{base}'")]
    UnknownBaseService { alias: String, base: String },

    /// An alias signature is not of the form `Base(arg, ...)`
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    /// The dependency graph contains a cycle
    #[error("Cyclic dependency found at '{cycle}'")]
    CyclicDependency { cycle: Cycle },

    /// Two services would share one identifier in the generated context
    #[error("Services '{first}' and '{second}' both map to '{ident}' in the generated context")]
    NameCollision {
        ident: String,
        first: String,
        second: String,
    },

    /// A service maps to a Rust keyword or to a name the context defines itself
    #[error("Service '{name}' maps to reserved name '{ident}' in the generated context")]
    ReservedName { name: String, ident: String },

    /// A source unit could not be turned into a descriptor
    #[error("Malformed service unit {}: {reason}", .path.display())]
    MalformedService { path: PathBuf, reason: String },

    /// Reading service units or writing the context failed
    #[error(transparent)]
    Filesystem(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WireError>;
