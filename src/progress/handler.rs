//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while a context is built
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Build started
    Started { service_dirs: usize },

    /// A service unit was found and is about to be parsed
    ServiceDiscovered { path: PathBuf },

    /// Descriptors and aliases were folded into the graph
    GraphBuilt { services: usize, aliases: usize },

    /// The graph has no cycle
    CycleCheckPassed,

    /// The rendered context was written
    ContextWritten { path: PathBuf, bytes: usize },

    /// Build completed successfully
    Completed { total_time: Duration },

    /// Build failed
    Failed { error: String },
}

/// Receives progress events during a build
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
